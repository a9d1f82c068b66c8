//! Shannon entropy calculation for letter guesses
//!
//! Given a letter and a set of candidates, computes the expected information gain
//! from guessing that letter.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a letter guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Number of candidates containing the letter at least once
    pub frequency: usize,
    /// `entropy + weight_freq * frequency`
    pub combined: f64,
}

/// Calculate Shannon entropy for guessing `letter` against candidates
///
/// Candidates are grouped by the set of positions where the letter occurs
/// (the empty set meaning "absent"); the entropy of the group sizes is the
/// expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the fraction of candidates revealing position set x.
///
/// # Examples
/// ```
/// use hangman_solver::core::Word;
/// use hangman_solver::solver::entropy::calculate_entropy;
///
/// let candidates = vec![Word::new("cat").unwrap(), Word::new("car").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// // 't' splits the two words evenly: 1 bit
/// assert!((calculate_entropy(b't', &candidate_refs) - 1.0).abs() < 1e-9);
/// // 'a' is in the same place in both: no information
/// assert!(calculate_entropy(b'a', &candidate_refs).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(letter: u8, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let partition_counts = group_by_positions(letter, candidates);

    shannon_entropy(&partition_counts)
}

/// Group candidates by the position mask of `letter`
fn group_by_positions(letter: u8, candidates: &[&Word]) -> FxHashMap<u64, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts.entry(candidate.positions_mask(letter)).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a partition-size distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one partition with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n partitions
///
/// # Examples
/// ```
/// use hangman_solver::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(0b001_u64, 25);
/// uniform.insert(0b010_u64, 25);
/// uniform.insert(0b100_u64, 25);
/// uniform.insert(0b000_u64, 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(partition_counts: &std::collections::HashMap<u64, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = partition_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    partition_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Number of candidates containing `letter` at least once
#[must_use]
pub fn document_frequency(letter: u8, candidates: &[&Word]) -> usize {
    candidates.iter().filter(|w| w.has_letter(letter)).count()
}

/// Calculate all metrics for a letter
///
/// Returns entropy, document frequency and the blended score.
#[must_use]
pub fn calculate_metrics(letter: u8, candidates: &[&Word], weight_freq: f64) -> LetterMetrics {
    if candidates.is_empty() {
        return LetterMetrics {
            entropy: 0.0,
            frequency: 0,
            combined: 0.0,
        };
    }

    let partition_counts = group_by_positions(letter, candidates);
    let entropy = shannon_entropy(&partition_counts);
    let frequency = document_frequency(letter, candidates);

    LetterMetrics {
        entropy,
        frequency,
        combined: entropy + weight_freq * frequency as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::loader::words_from_slice;

    fn refs(words: &[Word]) -> Vec<&Word> {
        words.iter().collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 partitions, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(0, 1);
        counts.insert(1, 1);
        counts.insert(2, 1);
        counts.insert(4, 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(0, 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<u64, usize> = FxHashMap::default();
        let entropy = shannon_entropy(&counts);
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_for_cat_car_can() {
        let words = words_from_slice(&["cat", "car", "can"]);
        let candidates = refs(&words);

        // {cat} vs {car, can}
        let expected = -(1.0 / 3.0 * (1.0_f64 / 3.0).log2() + 2.0 / 3.0 * (2.0_f64 / 3.0).log2());
        assert!((calculate_entropy(b't', &candidates) - expected).abs() < 1e-12);
        assert!((calculate_entropy(b'r', &candidates) - expected).abs() < 1e-12);
        assert!((expected - 0.918_295_834).abs() < 1e-6);
    }

    #[test]
    fn absent_letter_has_zero_entropy() {
        let words = words_from_slice(&["cat", "car", "can"]);
        let candidates = refs(&words);
        assert!(calculate_entropy(b'z', &candidates).abs() < f64::EPSILON);
    }

    #[test]
    fn repeated_letter_positions_form_distinct_partitions() {
        // 'a' at {1,3,5}, {1,3,5}, {1,3}: two partitions of sizes 2 and 1
        let words = words_from_slice(&["banana", "cabana", "salad"]);
        let candidates = refs(&words);
        let metrics = calculate_metrics(b'a', &candidates, 0.0);
        assert_eq!(metrics.frequency, 3);
        assert!(metrics.entropy > 0.9 && metrics.entropy < 0.92);
    }

    #[test]
    fn entropy_is_never_negative() {
        let words = words_from_slice(&["hangman", "hangers", "hanging", "banging"]);
        let candidates = refs(&words);
        for letter in b'a'..=b'z' {
            assert!(calculate_entropy(letter, &candidates) >= 0.0);
        }
    }

    #[test]
    fn document_frequency_counts_words_not_occurrences() {
        let words = words_from_slice(&["banana", "band", "cod"]);
        let candidates = refs(&words);
        assert_eq!(document_frequency(b'a', &candidates), 2);
        assert_eq!(document_frequency(b'n', &candidates), 2);
        assert_eq!(document_frequency(b'd', &candidates), 2);
        assert_eq!(document_frequency(b'z', &candidates), 0);
    }

    #[test]
    fn metrics_blend_entropy_and_frequency() {
        let words = words_from_slice(&["cat", "car", "can"]);
        let candidates = refs(&words);
        let metrics = calculate_metrics(b't', &candidates, 0.5);
        assert_eq!(metrics.frequency, 1);
        assert!((metrics.combined - (metrics.entropy + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn metrics_on_empty_candidates() {
        let metrics = calculate_metrics(b'e', &[], 0.5);
        assert_eq!(metrics.frequency, 0);
        assert!(metrics.combined.abs() < f64::EPSILON);
    }
}
