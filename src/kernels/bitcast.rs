//! This module contains the pure, stateless kernel for bit-casting 32-bit words.
//!
//! The pre-coder computes every delta on the signed view of a word so that the
//! same arithmetic serves both signed and unsigned callers. This module owns the
//! mapping between the two views: a reinterpretation of the 32 bits, never a
//! numeric conversion. Slice views rely on `bytemuck` and are zero-copy.

use crate::traits::CodecWord;

// Same-width `as` casts are defined as bit reinterpretation. Pin the two
// extremes so a change in that guarantee fails the build instead of corrupting
// data at runtime.
const _: () = assert!(i32::MIN as u32 == 0x8000_0000);
const _: () = assert!(u32::MAX as i32 == -1);

//==================================================================================
// 1. Scalar Mapping
//==================================================================================

/// Returns the `i32` whose two's-complement bits equal the bits of `u`.
#[inline(always)]
pub const fn to_signed(u: u32) -> i32 {
    u as i32
}

/// Inverse of [`to_signed`].
#[inline(always)]
pub const fn to_unsigned(s: i32) -> u32 {
    s as u32
}

//==================================================================================
// 2. Slice Views (Zero-Copy)
//==================================================================================

/// Views a caller's integer slice as raw 32-bit words.
pub fn as_words<T: CodecWord>(values: &[T]) -> &[u32] {
    bytemuck::cast_slice(values)
}

/// Views a caller's mutable integer slice as raw 32-bit words.
pub fn as_words_mut<T: CodecWord>(values: &mut [T]) -> &mut [u32] {
    bytemuck::cast_slice_mut(values)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
