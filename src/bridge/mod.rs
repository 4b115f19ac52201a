// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the intcodec library. It accepts
// `i32` or `u32` slices, reinterprets them as raw 32-bit words, and hands them to
// the `pipeline` engine, which never sees signedness.
//
// Data Flow (Compression):
//
//   1. [Stateless API / IntegerCodec]   -> Receives `&[i32]` or `&[u32]`
//         |
//         `-> bitcast::as_words (zero-copy) -> `&[u32]`
//
//   2. [Pipeline (orchestrator)]        -> precode::encode into scratch
//         |
//         `-> FastCompressor::compress into the caller's buffer
//
// Data Flow (Decompression):
//
//   1. [Pipeline (orchestrator)]        -> FastCompressor::decompress into working space
//         |                                (0 from the compressor => return 0)
//         `-> precode::decode into the caller's words
//
//   2. [Stateless API / IntegerCodec]   -> The caller's slice now holds its values
//
// ====================================================================================
pub mod codec;
pub mod format;
pub mod stateless_api;

// --- High-Level Configured API ---
pub use codec::{Backend, IntegerCodec};

// --- Low-Level Stateless API ---
pub use stateless_api::{
    compress, compress_to_buffer, decompress, decompress_from_buffer, get_compressed_buffer_size,
    get_decompression_working_space_size,
};

// --- Format Constants and Inspection ---
pub use format::{analyze_precoded, PrecodeStats};
