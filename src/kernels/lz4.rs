//! This module contains the LZ4 byte compressor the pre-coded stream is handed to.
//!
//! This is the Final Stage transform. The container format frames raw LZ4
//! blocks with a one-byte chunk count so that inputs larger than a single LZ4
//! block can be stored:
//!
//! ```text
//! single chunk : [0x00][lz4 block]
//! multi chunk  : [n][i32 len][lz4 block] ... n times
//! ```
//!
//! The block codec itself is `lz4_flex`, used in its safe, panic-free mode.

use lz4_flex::block;

use crate::error::IntCodecError;
use crate::traits::FastCompressor;

/// Largest input a single LZ4 block accepts.
pub const LZ4_MAX_INPUT_SIZE: usize = 0x7E00_0000;
/// Chunk counts are stored in one byte and must stay positive as a signed char.
pub const MAX_CHUNKS: usize = 127;
const CHUNK_LEN_BYTES: usize = 4;

/// LZ4 block compressor with chunk framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz4Compressor {
    max_chunk: usize,
}

impl Default for Lz4Compressor {
    fn default() -> Self {
        Self {
            max_chunk: LZ4_MAX_INPUT_SIZE,
        }
    }
}

impl Lz4Compressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A compressor that splits at `max_chunk` bytes instead of the LZ4 limit.
    pub fn with_chunk_size(max_chunk: usize) -> Self {
        Self {
            max_chunk: max_chunk.clamp(1, LZ4_MAX_INPUT_SIZE),
        }
    }

    /// Largest input `compress` accepts.
    pub fn max_input_size(&self) -> usize {
        MAX_CHUNKS * self.max_chunk
    }

    fn num_chunks(&self, input_len: usize) -> usize {
        input_len.div_ceil(self.max_chunk)
    }
}

//==================================================================================
// 1. Core Logic
//==================================================================================

fn decompress_framed(max_chunk: usize, src: &[u8], dst: &mut [u8]) -> Option<usize> {
    let (&num_chunks, mut rest) = src.split_first()?;

    if num_chunks == 0 {
        return block::decompress_into(rest, dst)
            .map_err(|e| log::debug!("lz4 decompress failed: {}", e))
            .ok();
    }

    let mut written = 0usize;
    for _ in 0..num_chunks {
        if rest.len() < CHUNK_LEN_BYTES {
            log::debug!("lz4 decompress failed: truncated chunk header");
            return None;
        }
        let (len_bytes, tail) = rest.split_at(CHUNK_LEN_BYTES);
        let chunk_len = i32::from_le_bytes(len_bytes.try_into().ok()?);
        let chunk_len = usize::try_from(chunk_len).ok().filter(|&n| n <= tail.len())?;
        let (chunk, tail) = tail.split_at(chunk_len);

        let out_end = dst.len().min(written + max_chunk);
        let n = block::decompress_into(chunk, &mut dst[written..out_end])
            .map_err(|e| log::debug!("lz4 decompress failed: {}", e))
            .ok()?;
        written += n;
        rest = tail;
    }
    Some(written)
}

//==================================================================================
// 2. FastCompressor Implementation
//==================================================================================

impl FastCompressor for Lz4Compressor {
    fn max_compressed_size(&self, input_len: usize) -> usize {
        if input_len <= self.max_chunk {
            return 1 + block::get_maximum_output_size(input_len);
        }
        let whole = input_len / self.max_chunk;
        let part = input_len % self.max_chunk;
        let per_chunk = CHUNK_LEN_BYTES + block::get_maximum_output_size(self.max_chunk);
        let mut size = 1 + whole * per_chunk;
        if part > 0 {
            size += CHUNK_LEN_BYTES + block::get_maximum_output_size(part);
        }
        size
    }

    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, IntCodecError> {
        if src.len() > self.max_input_size() {
            return Err(IntCodecError::InputTooLarge {
                len: src.len(),
                max: self.max_input_size(),
            });
        }
        let needed = self.max_compressed_size(src.len());
        if dst.len() < needed {
            return Err(IntCodecError::BufferTooSmall {
                needed,
                actual: dst.len(),
            });
        }

        if src.len() <= self.max_chunk {
            dst[0] = 0;
            let n = block::compress_into(src, &mut dst[1..])?;
            return Ok(n + 1);
        }

        // `num_chunks` <= MAX_CHUNKS by the size check above.
        dst[0] = self.num_chunks(src.len()) as u8;
        let mut pos = 1usize;
        for chunk in src.chunks(self.max_chunk) {
            let body = pos + CHUNK_LEN_BYTES;
            let n = block::compress_into(chunk, &mut dst[body..])?;
            let len = i32::try_from(n).map_err(|_| {
                IntCodecError::CompressionFailed(format!("lz4 chunk of {} bytes overflows i32", n))
            })?;
            dst[pos..body].copy_from_slice(&len.to_le_bytes());
            pos = body + n;
        }
        Ok(pos)
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> usize {
        decompress_framed(self.max_chunk, src, dst).unwrap_or(0)
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn compress_vec(c: &Lz4Compressor, input: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; c.max_compressed_size(input.len())];
        let n = c.compress(input, &mut out).unwrap();
        out.truncate(n);
        out
    }

    #[test]
    fn test_lz4_single_chunk_roundtrip() {
        let c = Lz4Compressor::new();
        let input = b"index index index index 0123 0123 0123 0123".to_vec();
        let compressed = compress_vec(&c, &input);
        assert_eq!(compressed[0], 0);
        assert!(compressed.len() <= c.max_compressed_size(input.len()));

        let mut out = vec![0u8; input.len()];
        assert_eq!(c.decompress(&compressed, &mut out), input.len());
        assert_eq!(out, input);
    }

    #[test]
    fn test_lz4_highly_compressible() {
        let c = Lz4Compressor::new();
        let input = vec![0u8; 10_000];
        let compressed = compress_vec(&c, &input);
        assert!(compressed.len() < 100);
    }

    #[test]
    fn test_lz4_multi_chunk_roundtrip() {
        let c = Lz4Compressor::with_chunk_size(64);
        let input: Vec<u8> = (0..1000u32).map(|i| (i * 7 % 251) as u8).collect();
        let compressed = compress_vec(&c, &input);
        assert_eq!(compressed[0] as usize, 1000usize.div_ceil(64));

        let mut out = vec![0u8; input.len()];
        assert_eq!(c.decompress(&compressed, &mut out), input.len());
        assert_eq!(out, input);
    }

    #[test]
    fn test_lz4_rejects_oversized_input() {
        let c = Lz4Compressor::with_chunk_size(1);
        let input = vec![1u8; MAX_CHUNKS + 1];
        let mut out = vec![0u8; 4096];
        assert!(matches!(
            c.compress(&input, &mut out),
            Err(IntCodecError::InputTooLarge { .. })
        ));
    }

    #[test]
    fn test_lz4_garbage_decompresses_to_zero() {
        let c = Lz4Compressor::new();
        let mut out = vec![0u8; 64];
        assert_eq!(c.decompress(&[], &mut out), 0);
        // Claims three chunks but carries no chunk headers.
        assert_eq!(c.decompress(&[3, 1, 2], &mut out), 0);
        // Negative chunk length.
        assert_eq!(c.decompress(&[1, 0xFF, 0xFF, 0xFF, 0xFF], &mut out), 0);
    }

    #[test]
    fn test_lz4_output_too_small_decompresses_to_zero() {
        let c = Lz4Compressor::new();
        let input = vec![9u8; 500];
        let compressed = compress_vec(&c, &input);
        let mut out = vec![0u8; 100];
        assert_eq!(c.decompress(&compressed, &mut out), 0);
    }
}
