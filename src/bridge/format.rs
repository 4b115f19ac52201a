// In: src/bridge/format.rs

//! Defines the wire constants of the pre-coded stream and a cheap inspector for it.
//! This is the single source of truth for the byte layout shared by the
//! pre-coder, the sizing functions and anything that wants to look at a stream
//! without decoding it.

use serde::{Deserialize, Serialize};

use crate::error::IntCodecError;
use crate::kernels::precode::{tag_at, Tag};
use crate::kernels::sizing::tag_region_len;

//==================================================================================
// I. Pre-coded Stream Layout
//==================================================================================

/// Size of the leading little-endian `i32` common delta.
pub const COMMON_VALUE_BYTES: usize = 4;
/// Width of a per-element tag.
pub const TAG_BITS: usize = 2;
/// Mask selecting one tag from the low bits of a byte.
pub const TAG_MASK: u8 = 0b11;
/// Tags packed into a single byte, lowest element in the lowest bits.
pub const TAGS_PER_BYTE: usize = 8 / TAG_BITS;

//==================================================================================
// II. Inspection
//==================================================================================

/// Summary of a pre-coded stream, returned by `analyze_precoded`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrecodeStats {
    pub num_ints: usize,
    pub common_value: i32,
    /// Element counts per tag, indexed by the tag's 2-bit code.
    pub tag_counts: [usize; 4],
    pub tag_bytes: usize,
    pub residual_bytes: usize,
    pub total_size: usize,
}

impl PrecodeStats {
    /// Count of elements carrying `tag`.
    pub fn count(&self, tag: Tag) -> usize {
        self.tag_counts[tag as usize]
    }
}

/// Walks the tag region of a pre-coded stream of `num_ints` elements without
/// reconstructing any values.
pub fn analyze_precoded(bytes: &[u8], num_ints: usize) -> Result<PrecodeStats, IntCodecError> {
    if num_ints == 0 {
        return Ok(PrecodeStats {
            num_ints,
            common_value: 0,
            tag_counts: [0; 4],
            tag_bytes: 0,
            residual_bytes: 0,
            total_size: 0,
        });
    }

    let tag_bytes = tag_region_len(num_ints);
    let header_len = COMMON_VALUE_BYTES + tag_bytes;
    if bytes.len() < header_len {
        return Err(IntCodecError::TruncatedStream {
            needed: header_len,
            actual: bytes.len(),
        });
    }

    let mut common = [0u8; COMMON_VALUE_BYTES];
    common.copy_from_slice(&bytes[..COMMON_VALUE_BYTES]);
    let tags = &bytes[COMMON_VALUE_BYTES..header_len];

    let mut tag_counts = [0usize; 4];
    let mut residual_bytes = 0usize;
    for index in 0..num_ints {
        let tag = tag_at(tags, index);
        tag_counts[tag as usize] += 1;
        residual_bytes += tag.residual_len();
    }

    let total_size = header_len + residual_bytes;
    if bytes.len() < total_size {
        return Err(IntCodecError::TruncatedStream {
            needed: total_size,
            actual: bytes.len(),
        });
    }

    Ok(PrecodeStats {
        num_ints,
        common_value: i32::from_le_bytes(common),
        tag_counts,
        tag_bytes,
        residual_bytes,
        total_size,
    })
}
