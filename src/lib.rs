//! This file is the root of the `intcodec` Rust crate.
//!
//! `intcodec` compresses lists of 32-bit table indices, the kind that fill the
//! structural sections of a binary scene-description file. A list is first
//! pre-coded (delta transform, one shared "common" delta, 2-bit tags, narrow
//! residuals) and the result is then handed to LZ4.
//!
//! Its responsibilities here are strictly limited to declaring the top-level
//! modules and re-exporting the public surface.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod kernels;
pub mod pipeline;

mod error;
mod traits;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::{
    analyze_precoded, compress, compress_to_buffer, decompress, decompress_from_buffer,
    get_compressed_buffer_size, get_decompression_working_space_size, IntegerCodec,
    PrecodeStats,
};
pub use config::{BackendConfig, CodecConfig};
pub use error::IntCodecError;
pub use traits::{CodecWord, FastCompressor};
