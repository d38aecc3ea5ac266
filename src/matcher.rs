//! Approximate motif search under a Hamming mismatch threshold.
//!
//! A window of the motif's length slides across the sequence one offset at a
//! time. Every offset whose window differs from the motif in at most
//! `max_mismatches` positions is reported. Offsets are visited, and returned,
//! in ascending order; plotting and reporting rely on that.
//!
//! No index is built. Cost is O((N-M+1)·M) in the worst case, with each window
//! abandoned as soon as its running mismatch count passes the threshold.
//!
//! ### Example
//! ```
//! use gma::find_motif;
//! let pos = find_motif(b"ATGCATGCATGC", b"ATC", 1).unwrap();
//! assert_eq!(pos, vec![0, 4, 8]);
//! ```
//!
use crate::common::GmaError;
use crate::distance::hamming_within;

/// One accepted window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotifHit {
    /// 0-based start offset in the sequence.
    pub position: usize,
    /// Hamming distance between the window and the motif.
    pub mismatches: usize,
}

/// Find all windows within `max_mismatches` of `motif`, with their distances.
///
/// - An empty motif is [`GmaError::InvalidInput`].
/// - A motif longer than the sequence (an empty sequence included) yields no
///   hits and no error.
/// - `max_mismatches >= motif.len()` accepts every offset.
pub fn find_hits(sequence: &[u8], motif: &[u8], max_mismatches: usize) -> Result<Vec<MotifHit>, GmaError> {
    if motif.is_empty() {
        return Err(GmaError::invalid("find", "motif must not be empty"));
    }
    let m = motif.len();
    if m > sequence.len() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for i in 0..=sequence.len() - m {
        if let Some(d) = hamming_within(&sequence[i..i + m], motif, max_mismatches) {
            out.push(MotifHit { position: i, mismatches: d });
        }
    }
    Ok(out)
}

/// Start positions of all windows within `max_mismatches` of `motif`.
///
/// See [`find_hits`] for the edge-case rules.
pub fn find_motif(sequence: &[u8], motif: &[u8], max_mismatches: usize) -> Result<Vec<usize>, GmaError> {
    Ok(find_hits(sequence, motif, max_mismatches)?.into_iter().map(|h| h.position).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::hamming_distance;
    use rand::Rng;

    #[test]
    fn exact_repeats() {
        assert_eq!(find_motif(b"ATGCATGCATGC", b"ATG", 0).unwrap(), vec![0, 4, 8]);
    }

    #[test]
    fn one_mismatch() {
        assert_eq!(find_motif(b"ATGCATGCATGC", b"ATC", 1).unwrap(), vec![0, 4, 8]);
        let hits = find_hits(b"ATGCATGCATGC", b"ATC", 1).unwrap();
        assert!(hits.iter().all(|h| h.mismatches == 1));
    }

    #[test]
    fn motif_longer_than_sequence() {
        assert!(find_motif(b"AAAA", b"AAAAA", 0).unwrap().is_empty());
        assert!(find_motif(b"", b"A", 3).unwrap().is_empty());
    }

    #[test]
    fn empty_motif_is_invalid() {
        let err = find_motif(b"ACGT", b"", 0).unwrap_err();
        assert!(matches!(err, GmaError::InvalidInput { .. }));
    }

    #[test]
    fn threshold_at_motif_length_accepts_all() {
        let seq = b"ACGTTGCA";
        assert_eq!(find_motif(seq, b"GGG", 3).unwrap(), (0..=5).collect::<Vec<_>>());
        assert_eq!(find_motif(seq, b"GGG", 10).unwrap().len(), 6);
    }

    #[test]
    fn motif_equal_to_sequence() {
        assert_eq!(find_motif(b"ACGT", b"ACGT", 0).unwrap(), vec![0]);
        assert!(find_motif(b"ACGT", b"ACGA", 0).unwrap().is_empty());
    }

    #[test]
    fn case_is_significant() {
        assert!(find_motif(b"acgt", b"ACG", 0).unwrap().is_empty());
        assert_eq!(find_motif(b"acgt", b"ACG", 3).unwrap(), vec![0, 1]);
    }

    #[test]
    fn exact_search_matches_substring_search() {
        let seq = "GATTACAGATTACATTA";
        let motif = "TTA";
        let expected: Vec<usize> = (0..=seq.len() - motif.len()).filter(|&i| &seq[i..i + motif.len()] == motif).collect();
        assert_eq!(find_motif(seq.as_bytes(), motif.as_bytes(), 0).unwrap(), expected);
    }

    #[test]
    fn random_sound_and_complete() {
        let mut rng = rand::thread_rng();
        let alphabet = b"ACGT";
        for _ in 0..200 {
            let n = rng.gen_range(0..40);
            let m = rng.gen_range(1..6);
            let k = rng.gen_range(0..4);
            let seq: Vec<u8> = (0..n).map(|_| alphabet[rng.gen_range(0..4)]).collect();
            let motif: Vec<u8> = (0..m).map(|_| alphabet[rng.gen_range(0..4)]).collect();
            let got = find_motif(&seq, &motif, k).unwrap();
            let expected: Vec<usize> = if m > n {
                Vec::new()
            } else {
                (0..=n - m).filter(|&i| hamming_distance(&seq[i..i + m], &motif) <= k).collect()
            };
            assert_eq!(got, expected);
            assert!(got.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(find_motif(&seq, &motif, k).unwrap(), got);
        }
    }
}
