// In: src/pipeline/orchestrator.rs

//! The compressor wrapper: pre-coder in front, byte compressor behind.
//!
//! Both directions are whole-buffer and own at most one transient scratch
//! buffer of `max_precoded_size(N)` bytes. Everything here works on raw `u32`
//! words; signedness is resolved by the bridge before it calls in.

use crate::error::IntCodecError;
use crate::kernels::precode;
use crate::kernels::sizing::{decompression_working_space_size, max_precoded_size};
use crate::traits::FastCompressor;

/// Worst-case size of `compress_words` output for `num_ints` words.
pub fn compressed_buffer_size<C>(compressor: &C, num_ints: usize) -> usize
where
    C: FastCompressor + ?Sized,
{
    compressor.max_compressed_size(max_precoded_size(num_ints))
}

/// Pre-codes `words` into a transient scratch buffer and compresses it into
/// `output`. Returns the compressor's byte count verbatim.
pub fn compress_words<C>(
    compressor: &C,
    words: &[u32],
    output: &mut [u8],
) -> Result<usize, IntCodecError>
where
    C: FastCompressor + ?Sized,
{
    let mut scratch = vec![0u8; max_precoded_size(words.len())];
    let encoded_len = precode::encode(words, &mut scratch)?;

    let written = compressor.compress(&scratch[..encoded_len], output)?;
    log::trace!(
        "compress_words: {} ints -> {} pre-coded -> {} compressed bytes",
        words.len(),
        encoded_len,
        written
    );
    Ok(written)
}

/// Decompresses `compressed` and decodes `output.len()` words from it.
///
/// `working_space`, if given, must hold `decompression_working_space_size(N)`
/// bytes; otherwise a transient buffer is allocated. A compressor failure
/// yields `Ok(0)`, matching the compressor's own failure signal.
pub fn decompress_words<C>(
    compressor: &C,
    compressed: &[u8],
    output: &mut [u32],
    working_space: Option<&mut [u8]>,
) -> Result<usize, IntCodecError>
where
    C: FastCompressor + ?Sized,
{
    let needed = decompression_working_space_size(output.len());
    let mut owned;
    let workspace: &mut [u8] = match working_space {
        Some(buf) if buf.len() < needed => {
            return Err(IntCodecError::BufferTooSmall {
                needed,
                actual: buf.len(),
            });
        }
        Some(buf) => &mut buf[..needed],
        None => {
            owned = vec![0u8; needed];
            owned.as_mut_slice()
        }
    };

    let decompressed_len = compressor.decompress(compressed, workspace);
    if decompressed_len == 0 {
        log::trace!(
            "decompress_words: compressor returned 0 for {} input bytes",
            compressed.len()
        );
        return Ok(0);
    }

    precode::decode(&workspace[..decompressed_len], output)
}
