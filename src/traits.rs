//! This module defines the shared traits at the two seams of the codec: the
//! 32-bit word types callers hand in, and the general-purpose byte compressor
//! the pre-coded stream is sandwiched into.

use bytemuck::Pod;
use num_traits::PrimInt;

use crate::error::IntCodecError;

//==================================================================================
// 1. Word Types
//==================================================================================

mod private {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
}

/// A 32-bit integer type the codec accepts. Only `i32` and `u32` implement it.
///
/// Both are `Pod` with the size and alignment of `u32`, so a slice of either can
/// be viewed as a slice of raw words without copying. The codec itself only ever
/// sees `u32` words; signedness is a property of the caller's view.
pub trait CodecWord: PrimInt + Pod + private::Sealed {
    /// Name used in log lines.
    const NAME: &'static str;
}

impl CodecWord for i32 {
    const NAME: &'static str = "i32";
}

impl CodecWord for u32 {
    const NAME: &'static str = "u32";
}

//==================================================================================
// 2. Byte Compressor Contract
//==================================================================================

/// The contract for the general byte compressor run over the pre-coded stream.
///
/// * `max_compressed_size(n)` is independent of content and at least `n`.
/// * `compress` is lossless and never writes more than `max_compressed_size(src.len())`.
/// * `decompress` returns the original uncompressed length on success and `0` on
///   any failure. It never panics on malformed input.
pub trait FastCompressor {
    fn max_compressed_size(&self, input_len: usize) -> usize;

    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, IntCodecError>;

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> usize;
}

impl<C: FastCompressor + ?Sized> FastCompressor for &C {
    fn max_compressed_size(&self, input_len: usize) -> usize {
        (**self).max_compressed_size(input_len)
    }

    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, IntCodecError> {
        (**self).compress(src, dst)
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> usize {
        (**self).decompress(src, dst)
    }
}
