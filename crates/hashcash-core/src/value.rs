//! Stamp value: the number of contiguous leading zero bits in a digest.

/// Count leading zero bits, starting at the most significant bit of the
/// first byte.
///
/// An all-zero input yields `8 * len`; an empty input yields 0.
pub fn leading_zero_bits(digest: &[u8]) -> u32 {
    let mut count = 0u32;
    for byte in digest {
        if *byte == 0 {
            count += 8;
            continue;
        }
        count += byte.leading_zeros();
        break;
    }
    count
}

/// Whether `digest` has at least `target` leading zero bits.
pub fn meets_target(digest: &[u8], target: u32) -> bool {
    leading_zero_bits(digest) >= target
}
