// In: src/bridge/stateless_api.rs

//! The stateless public surface. Every function here uses the container's LZ4
//! framing, so its output is interchangeable with persisted scene data.
//!
//! `i32` and `u32` share one code path: slices are reinterpreted as raw words
//! on the way in and out, never converted.

use crate::error::IntCodecError;
use crate::kernels::bitcast::{as_words, as_words_mut};
use crate::kernels::lz4::Lz4Compressor;
use crate::kernels::sizing;
use crate::pipeline;
use crate::traits::CodecWord;

/// Bytes a caller must provide to `compress_to_buffer` for `num_ints` integers.
pub fn get_compressed_buffer_size(num_ints: usize) -> usize {
    pipeline::compressed_buffer_size(&Lz4Compressor::new(), num_ints)
}

/// Bytes of working space `decompress_from_buffer` needs for `num_ints` integers.
pub fn get_decompression_working_space_size(num_ints: usize) -> usize {
    sizing::decompression_working_space_size(num_ints)
}

/// Compresses `ints` into `compressed`, returning the number of bytes written.
///
/// `compressed` must hold `get_compressed_buffer_size(ints.len())` bytes.
pub fn compress_to_buffer<T: CodecWord>(
    ints: &[T],
    compressed: &mut [u8],
) -> Result<usize, IntCodecError> {
    pipeline::compress_words(&Lz4Compressor::new(), as_words(ints), compressed)
}

/// Decompresses `ints.len()` integers from `compressed`.
///
/// Returns the number of integers written, or 0 if the byte decompressor
/// rejected the input. The element count is not stored in `compressed`; it
/// must match what was compressed.
pub fn decompress_from_buffer<T: CodecWord>(
    compressed: &[u8],
    ints: &mut [T],
    working_space: Option<&mut [u8]>,
) -> Result<usize, IntCodecError> {
    pipeline::decompress_words(
        &Lz4Compressor::new(),
        compressed,
        as_words_mut(ints),
        working_space,
    )
}

/// Compresses `ints` into a freshly allocated, exactly sized vector.
pub fn compress<T: CodecWord>(ints: &[T]) -> Result<Vec<u8>, IntCodecError> {
    let mut out = vec![0u8; get_compressed_buffer_size(ints.len())];
    let n = compress_to_buffer(ints, &mut out)?;
    out.truncate(n);
    Ok(out)
}

/// Decompresses `num_ints` integers into a new vector.
///
/// Unlike `decompress_from_buffer`, a rejected input is an error here: an
/// empty vector would be indistinguishable from a valid empty list.
pub fn decompress<T: CodecWord>(
    compressed: &[u8],
    num_ints: usize,
) -> Result<Vec<T>, IntCodecError> {
    let mut ints = vec![T::zero(); num_ints];
    let n = decompress_from_buffer(compressed, &mut ints, None)?;
    if n != num_ints {
        return Err(IntCodecError::CompressionFailed(format!(
            "lz4 rejected {} compressed bytes while decoding {} {} values",
            compressed.len(),
            num_ints,
            T::NAME
        )));
    }
    Ok(ints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_follow_precoded_bound() {
        assert_eq!(get_decompression_working_space_size(0), 0);
        assert_eq!(get_decompression_working_space_size(8), 4 + 2 + 32);
        assert!(get_compressed_buffer_size(8) > get_decompression_working_space_size(8));
    }

    #[test]
    fn test_owned_roundtrip_signed() {
        let ints: Vec<i32> = vec![-5, -4, -3, 1_000_000, i32::MIN, i32::MAX, 0];
        let compressed = compress(&ints).unwrap();
        let decoded: Vec<i32> = decompress(&compressed, ints.len()).unwrap();
        assert_eq!(decoded, ints);
    }

    #[test]
    fn test_owned_decompress_rejects_garbage() {
        let result = decompress::<u32>(&[5, 5], 3);
        assert!(matches!(result, Err(IntCodecError::CompressionFailed(_))));
    }
}
