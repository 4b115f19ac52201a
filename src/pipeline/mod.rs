// In: src/pipeline/mod.rs

//! The codec engine: sequences the pre-coder and a byte compressor over raw
//! 32-bit words. Callers reach it through the `bridge`.

pub mod orchestrator;

pub use orchestrator::{compress_words, compressed_buffer_size, decompress_words};
