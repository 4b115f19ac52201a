//! This module contains the integer pre-coder: the stage that turns a list of
//! 32-bit table indices into a byte stream a general compressor handles well.
//!
//! The stream is a delta transform followed by a 2-bit classification of every
//! delta. The most frequent delta is written once up front and referenced by
//! tag `00`; everything else is stored in the narrowest of 1, 2 or 4 bytes.
//!
//! ```text
//! [ i32 common ][ ceil(N/4) tag bytes ][ residuals ... ]
//! ```
//!
//! Monotonic index lists collapse to roughly 2 bits per element, and the worst
//! case is 34 bits per element. Element count is never stored; both sides
//! must agree on it out-of-band.

use std::cmp::Reverse;

use hashbrown::HashMap;

use crate::bridge::format::{COMMON_VALUE_BYTES, TAGS_PER_BYTE, TAG_BITS, TAG_MASK};
use crate::error::IntCodecError;
use crate::kernels::bitcast::{to_signed, to_unsigned};
use crate::kernels::sizing::{max_precoded_size, tag_region_len};

//==================================================================================
// 1. Tags
//==================================================================================

/// How a single delta is represented in the residual area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Delta equals the stream's common value. No residual.
    Common = 0b00,
    /// Delta fits in an `i8`.
    One = 0b01,
    /// Delta fits in an `i16`.
    Two = 0b10,
    /// Delta needs the full `i32`.
    Four = 0b11,
}

impl Tag {
    /// Smallest category for `delta`. Equality with `common` wins over magnitude.
    #[inline]
    pub fn classify(delta: i32, common: i32) -> Tag {
        if delta == common {
            Tag::Common
        } else if i8::try_from(delta).is_ok() {
            Tag::One
        } else if i16::try_from(delta).is_ok() {
            Tag::Two
        } else {
            Tag::Four
        }
    }

    /// Decodes the low two bits of `bits`. Total over all inputs.
    #[inline]
    pub fn from_bits(bits: u8) -> Tag {
        match bits & TAG_MASK {
            0b00 => Tag::Common,
            0b01 => Tag::One,
            0b10 => Tag::Two,
            _ => Tag::Four,
        }
    }

    /// Number of residual bytes this tag consumes.
    #[inline]
    pub const fn residual_len(self) -> usize {
        match self {
            Tag::Common => 0,
            Tag::One => 1,
            Tag::Two => 2,
            Tag::Four => 4,
        }
    }
}

/// Extracts the tag of element `index` from a tag region.
#[inline]
pub(crate) fn tag_at(tags: &[u8], index: usize) -> Tag {
    let shift = TAG_BITS * (index % TAGS_PER_BYTE);
    Tag::from_bits(tags[index / TAGS_PER_BYTE] >> shift)
}

//==================================================================================
// 2. Delta Iteration & Mode Selection
//==================================================================================

/// Yields the wrapped signed deltas of `words`, with a phantom zero predecessor.
fn deltas(words: &[u32]) -> impl Iterator<Item = i32> + '_ {
    let mut prev: i32 = 0;
    words.iter().map(move |&w| {
        let cur = to_signed(w);
        let delta = cur.wrapping_sub(prev);
        prev = cur;
        delta
    })
}

/// Returns the most frequent delta of `words`, or `None` for an empty input.
///
/// Among equally frequent deltas the lowest value wins, so the choice is stable
/// across runs and platforms.
pub fn most_common_delta(words: &[u32]) -> Option<i32> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for delta in deltas(words) {
        *counts.entry(delta).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(delta, count)| (count, Reverse(delta)))
        .map(|(delta, _)| delta)
}

//==================================================================================
// 3. Public API
//==================================================================================

/// Pre-codes `words` into `output`, returning the number of bytes written.
///
/// `output` must hold at least `max_precoded_size(words.len())` bytes. An empty
/// input writes nothing and returns 0.
pub fn encode(words: &[u32], output: &mut [u8]) -> Result<usize, IntCodecError> {
    let common = match most_common_delta(words) {
        Some(common) => common,
        None => return Ok(0),
    };

    let needed = max_precoded_size(words.len());
    if output.len() < needed {
        return Err(IntCodecError::BufferTooSmall {
            needed,
            actual: output.len(),
        });
    }

    let (header, rest) = output.split_at_mut(COMMON_VALUE_BYTES);
    header.copy_from_slice(&common.to_le_bytes());
    let (tags, residuals) = rest.split_at_mut(tag_region_len(words.len()));

    let mut cursor = 0usize;
    let mut stream = deltas(words);
    for tag_byte in tags.iter_mut() {
        let mut packed = 0u8;
        for (slot, delta) in stream.by_ref().take(TAGS_PER_BYTE).enumerate() {
            let tag = Tag::classify(delta, common);
            packed |= (tag as u8) << (TAG_BITS * slot);
            match tag {
                Tag::Common => {}
                Tag::One => residuals[cursor] = delta as i8 as u8,
                Tag::Two => {
                    residuals[cursor..cursor + 2].copy_from_slice(&(delta as i16).to_le_bytes())
                }
                Tag::Four => residuals[cursor..cursor + 4].copy_from_slice(&delta.to_le_bytes()),
            }
            cursor += tag.residual_len();
        }
        *tag_byte = packed;
    }

    log::debug!(
        "precode::encode: {} ints, common delta {}, {} residual bytes",
        words.len(),
        common,
        cursor
    );
    Ok(COMMON_VALUE_BYTES + tags.len() + cursor)
}

/// Reconstructs `output.len()` words from a pre-coded stream, returning the count.
///
/// The element count comes from the caller. A stream shorter than its own tags
/// demand is rejected with `TruncatedStream` rather than read past.
pub fn decode(data: &[u8], output: &mut [u32]) -> Result<usize, IntCodecError> {
    let num_ints = output.len();
    if num_ints == 0 {
        return Ok(0);
    }

    let header_len = COMMON_VALUE_BYTES + tag_region_len(num_ints);
    if data.len() < header_len {
        return Err(IntCodecError::TruncatedStream {
            needed: header_len,
            actual: data.len(),
        });
    }

    let mut common_bytes = [0u8; COMMON_VALUE_BYTES];
    common_bytes.copy_from_slice(&data[..COMMON_VALUE_BYTES]);
    let common = i32::from_le_bytes(common_bytes);
    let tags = &data[COMMON_VALUE_BYTES..header_len];
    let residuals = &data[header_len..];

    let mut cursor = 0usize;
    let mut acc: i32 = 0;
    for (index, slot) in output.iter_mut().enumerate() {
        let tag = tag_at(tags, index);
        let end = cursor + tag.residual_len();
        let Some(raw) = residuals.get(cursor..end) else {
            return Err(IntCodecError::TruncatedStream {
                needed: header_len + end,
                actual: data.len(),
            });
        };
        let delta = match tag {
            Tag::Common => common,
            Tag::One => i32::from(raw[0] as i8),
            Tag::Two => i32::from(i16::from_le_bytes([raw[0], raw[1]])),
            Tag::Four => i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]),
        };
        acc = acc.wrapping_add(delta);
        *slot = to_unsigned(acc);
        cursor = end;
    }

    Ok(num_ints)
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
