//! This module contains a Zstandard byte compressor for the pre-coded stream.
//!
//! This is an alternative Final Stage transform for callers that own both ends
//! of the data and prefer ratio over speed. Its output is NOT the container's
//! LZ4 framing. This module is a safe, panic-free wrapper around the `zstd`
//! crate's bulk (single-frame, caller-buffer) API.

use crate::error::IntCodecError;
use crate::traits::FastCompressor;

/// Level used when a config does not name one.
pub const DEFAULT_LEVEL: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZstdCompressor {
    level: i32,
}

impl Default for ZstdCompressor {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

impl ZstdCompressor {
    pub fn new(level: i32) -> Self {
        Self { level }
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl FastCompressor for ZstdCompressor {
    fn max_compressed_size(&self, input_len: usize) -> usize {
        zstd::zstd_safe::compress_bound(input_len)
    }

    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, IntCodecError> {
        let needed = self.max_compressed_size(src.len());
        if dst.len() < needed {
            return Err(IntCodecError::BufferTooSmall {
                needed,
                actual: dst.len(),
            });
        }
        zstd::bulk::compress_to_buffer(src, dst, self.level)
            .map_err(|e| IntCodecError::CompressionFailed(format!("zstd: {}", e)))
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> usize {
        zstd::bulk::decompress_to_buffer(src, dst).unwrap_or_else(|e| {
            log::debug!("zstd decompress failed: {}", e);
            0
        })
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zstd_roundtrip_simple_text() {
        let c = ZstdCompressor::default();
        let original = b"hello world, this is a test of zstd compression. hello world, this is a test.";

        let mut compressed = vec![0u8; c.max_compressed_size(original.len())];
        let n = c.compress(original, &mut compressed).unwrap();
        assert!(n < original.len());

        let mut decompressed = vec![0u8; original.len()];
        assert_eq!(c.decompress(&compressed[..n], &mut decompressed), original.len());
        assert_eq!(&decompressed[..], &original[..]);
    }

    #[test]
    fn test_zstd_highly_compressible_data() {
        let c = ZstdCompressor::new(5);
        let original = vec![42u8; 10_000];

        let mut compressed = vec![0u8; c.max_compressed_size(original.len())];
        let n = c.compress(&original, &mut compressed).unwrap();
        assert!(n < 50);
    }

    #[test]
    fn test_zstd_decompress_invalid_data() {
        let c = ZstdCompressor::default();
        let mut out = vec![0u8; 16];
        assert_eq!(c.decompress(&[1, 2, 3, 4, 5], &mut out), 0);
    }
}
