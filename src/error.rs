// In: src/error.rs

//! This module defines the single, unified error type for the entire intcodec library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntCodecError {
    // =========================================================================
    // === Buffer & Stream Errors (Specific to our codec's contracts)
    // =========================================================================
    #[error("Buffer too small: needed {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("Pre-coded stream truncated: tags require {needed} bytes, stream has {actual}")]
    TruncatedStream { needed: usize, actual: usize },

    #[error("Input of {len} bytes exceeds the compressor limit of {max} bytes")]
    InputTooLarge { len: usize, max: usize },

    // =========================================================================
    // === Backend Errors
    // =========================================================================
    #[error("Compression backend failed: {0}")]
    CompressionFailed(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, raised while loading a `CodecConfig`.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// An error originating from the underlying I/O subsystem (e.g., config file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<lz4_flex::block::CompressError> for IntCodecError {
    fn from(err: lz4_flex::block::CompressError) -> Self {
        IntCodecError::CompressionFailed(format!("lz4: {}", err))
    }
}
