//! Buffer sizing for the pre-coded stream.
//!
//! Every size here is a pure function of the element count. The compressed-size
//! query lives with the wrapper because it depends on the byte compressor.

use crate::bridge::format::{COMMON_VALUE_BYTES, TAGS_PER_BYTE};

/// Bytes occupied by the 2-bit tag region for `num_ints` elements.
#[inline]
pub const fn tag_region_len(num_ints: usize) -> usize {
    num_ints.div_ceil(TAGS_PER_BYTE)
}

/// Worst-case pre-coded size: every element takes a full 4-byte residual.
pub const fn max_precoded_size(num_ints: usize) -> usize {
    if num_ints == 0 {
        return 0;
    }
    COMMON_VALUE_BYTES + tag_region_len(num_ints) + num_ints * std::mem::size_of::<u32>()
}

/// The working space the decompressor needs to hold the pre-coded stream.
pub const fn decompression_working_space_size(num_ints: usize) -> usize {
    max_precoded_size(num_ints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_needs_nothing() {
        assert_eq!(max_precoded_size(0), 0);
        assert_eq!(decompression_working_space_size(0), 0);
    }

    #[test]
    fn test_tag_region_rounds_up() {
        assert_eq!(tag_region_len(1), 1);
        assert_eq!(tag_region_len(4), 1);
        assert_eq!(tag_region_len(5), 2);
        assert_eq!(tag_region_len(1024), 256);
    }

    #[test]
    fn test_worst_case_formula() {
        assert_eq!(max_precoded_size(1), 4 + 1 + 4);
        assert_eq!(max_precoded_size(7), 4 + 2 + 28);
        assert_eq!(max_precoded_size(10_000), 4 + 2_500 + 40_000);
    }
}
