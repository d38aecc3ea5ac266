//! Hamming distance between two byte sequences.
//!
//! Comparison runs over the overlapping prefix (`min(a.len(), b.len())`);
//! unequal lengths truncate rather than fail. Case is significant and any
//! byte is a valid symbol.
//!
//! ### Example
//! ```
//! use gma::{hamming_distance, hamming_within};
//! assert_eq!(hamming_distance(b"ATG", b"ATC"), 1);
//! assert_eq!(hamming_within(b"AAAA", b"TTTT", 1), None);
//! ```
#![allow(clippy::needless_range_loop)]

/// Count positions where `a` and `b` differ over their common prefix.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    let n = a.len().min(b.len());
    let mut d = 0usize;
    for i in 0..n {
        if a[i] != b[i] {
            d += 1;
        }
    }
    d
}

/// Like [`hamming_distance`] but stops as soon as the count exceeds `max`.
///
/// Returns `Some(distance)` when the distance is `<= max`, `None` otherwise.
pub fn hamming_within(a: &[u8], b: &[u8], max: usize) -> Option<usize> {
    let n = a.len().min(b.len());
    let mut d = 0usize;
    for i in 0..n {
        if a[i] != b[i] {
            d += 1;
            if d > max {
                return None;
            }
        }
    }
    Some(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_is_zero() {
        assert_eq!(hamming_distance(b"ACGT", b"ACGT"), 0);
        assert_eq!(hamming_distance(b"", b""), 0);
    }

    #[test]
    fn counts_every_mismatch() {
        assert_eq!(hamming_distance(b"ATG", b"ATC"), 1);
        assert_eq!(hamming_distance(b"AAAA", b"TTTT"), 4);
        assert_eq!(hamming_distance(b"acgt", b"ACGT"), 4);
    }

    #[test]
    fn unequal_lengths_truncate() {
        assert_eq!(hamming_distance(b"ACGTTT", b"ACGA"), 1);
        assert_eq!(hamming_distance(b"A", b""), 0);
    }

    #[test]
    fn bounded_agrees_with_full_count() {
        let pairs: [(&[u8], &[u8]); 4] = [(b"ACGT", b"ACGA"), (b"AAAA", b"TTTT"), (b"GATTACA", b"GATTACA"), (b"CC", b"GG")];
        for (a, b) in pairs {
            let full = hamming_distance(a, b);
            for max in 0..5 {
                let bounded = hamming_within(a, b, max);
                if full <= max {
                    assert_eq!(bounded, Some(full));
                } else {
                    assert_eq!(bounded, None);
                }
            }
        }
    }
}
