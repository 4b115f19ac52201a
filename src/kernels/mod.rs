//! Pure, stateless kernels. Leaves first: bit reinterpretation and sizing,
//! then the integer pre-coder, then the byte compressors it feeds.

pub mod bitcast;
pub mod lz4;
pub mod precode;
pub mod sizing;
pub mod zstd;
