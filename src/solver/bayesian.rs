//! Bayesian n-gram letter scoring
//!
//! Used when no corpus word fits the known constraints. Each hidden slot is
//! scored from the letter's unigram prior times add-alpha smoothed bigram and
//! trigram likelihoods from the revealed neighbours, and the per-slot scores
//! are summed per letter.

use super::{NgramStats, ScoreMap};
use crate::core::{LetterSet, Pattern};

/// Prior used for letters never observed in the corpus
pub const UNKNOWN_LETTER_PRIOR: f64 = 1e-12;

/// Add-alpha smoothing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    /// Constant added to every count
    pub alpha: f64,
    /// Vocabulary size used to scale alpha in the denominator
    pub vocabulary: f64,
}

impl Smoothing {
    #[must_use]
    pub const fn new(alpha: f64, vocabulary: f64) -> Self {
        Self { alpha, vocabulary }
    }

    /// Smoothed conditional probability `(count + α) / (total + α·V)`
    #[inline]
    #[must_use]
    pub fn probability(self, count: u64, total: u64) -> f64 {
        (count as f64 + self.alpha) / (total as f64 + self.alpha * self.vocabulary)
    }
}

impl Default for Smoothing {
    /// Laplace smoothing over the 26-letter alphabet
    fn default() -> Self {
        Self::new(1.0, 26.0)
    }
}

/// Context factors applied to one candidate letter in one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotFactors {
    pub prior: f64,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub trigram: Option<f64>,
}

impl SlotFactors {
    /// `prior × likelihood`, where likelihood is the product of the present factors
    #[must_use]
    pub fn score(&self) -> f64 {
        let likelihood = [self.left, self.right, self.trigram]
            .into_iter()
            .flatten()
            .product::<f64>();
        self.prior * likelihood
    }
}

/// Compute the factors for `letter` at `position` in `pattern`
///
/// - left: P(letter | left neighbour) = (count(A,X) + α) / (next_sum(A) + αV)
/// - right: (count(X,B) + α) / (next_sum(X) + αV). The denominator is the sum
///   over bigrams *starting* with X, not the sum over bigrams ending in B.
/// - trigram: (count(A,X,B) + α) / (`lr_sum`(A,B) + αV), only with both neighbours
#[must_use]
pub fn slot_factors(
    pattern: &Pattern,
    position: usize,
    letter: u8,
    stats: &NgramStats,
    smoothing: Smoothing,
) -> SlotFactors {
    let left = position.checked_sub(1).and_then(|i| pattern.slot(i));
    let right = pattern.slot(position + 1);

    SlotFactors {
        prior: stats
            .unigram_probability(letter)
            .unwrap_or(UNKNOWN_LETTER_PRIOR),
        left: left.map(|a| {
            smoothing.probability(stats.bigram_count(a, letter), stats.bigram_next_sum(a))
        }),
        right: right.map(|b| {
            smoothing.probability(stats.bigram_count(letter, b), stats.bigram_next_sum(letter))
        }),
        trigram: left.zip(right).map(|(a, b)| {
            smoothing.probability(stats.trigram_count(a, letter, b), stats.trigram_lr_sum(a, b))
        }),
    }
}

/// Score every unguessed letter by its summed posterior over hidden slots
///
/// Returns an empty map when every letter has been guessed or the pattern has
/// no hidden slot; the caller then falls back.
///
/// # Examples
/// ```
/// use hangman_solver::core::{LetterSet, Pattern};
/// use hangman_solver::corpus::loader::words_from_slice;
/// use hangman_solver::solver::bayesian::{Smoothing, score_letters};
/// use hangman_solver::solver::NgramStats;
///
/// let stats = NgramStats::build(&words_from_slice(&["queen", "quiet", "quote"]));
/// let pattern = Pattern::parse("q_").unwrap();
///
/// let scores = score_letters(&pattern, LetterSet::parse("q").unwrap(), &stats, Smoothing::default());
/// assert_eq!(scores.best().map(|(letter, _)| letter), Some(b'u'));
/// ```
#[must_use]
pub fn score_letters(
    pattern: &Pattern,
    guessed: LetterSet,
    stats: &NgramStats,
    smoothing: Smoothing,
) -> ScoreMap {
    let letters = guessed.complement();
    let mut scores = ScoreMap::new();

    if letters.is_empty() {
        return scores;
    }

    for position in pattern.wildcard_positions() {
        for letter in letters.iter() {
            let factors = slot_factors(pattern, position, letter, stats, smoothing);
            scores.accumulate(letter, factors.score());
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::loader::words_from_slice;

    fn stats() -> NgramStats {
        NgramStats::build(&words_from_slice(&["cat", "car", "can", "cot", "art"]))
    }

    #[test]
    fn slot_without_context_is_prior_only() {
        let stats = stats();
        let pattern = Pattern::hidden(3);
        let factors = slot_factors(&pattern, 1, b'a', &stats, Smoothing::default());

        assert_eq!(factors.left, None);
        assert_eq!(factors.right, None);
        assert_eq!(factors.trigram, None);
        assert!((factors.score() - stats.unigram_probability(b'a').unwrap()).abs() < 1e-15);
    }

    #[test]
    fn left_right_and_trigram_factors() {
        let stats = stats();
        let pattern = Pattern::parse("c_t").unwrap();
        let factors = slot_factors(&pattern, 1, b'a', &stats, Smoothing::default());

        // count(c,a)=3, next_sum(c)=4
        assert!((factors.left.unwrap() - 4.0 / 30.0).abs() < 1e-15);
        // count(a,t)=1, next_sum(a)=4 (at, ar, an, ar)
        assert!((factors.right.unwrap() - 2.0 / 30.0).abs() < 1e-15);
        // count(c,a,t)=1, lr_sum(c,t)=2 (cat, cot)
        assert!((factors.trigram.unwrap() - 2.0 / 28.0).abs() < 1e-15);
    }

    #[test]
    fn right_factor_uses_next_sum_of_candidate_letter() {
        let stats = stats();
        let pattern = Pattern::parse("_t").unwrap();
        let factors = slot_factors(&pattern, 0, b'r', &stats, Smoothing::default());

        // count(r,t)=1 over next_sum(r)=1, not prev_sum(t)
        assert!((factors.right.unwrap() - 2.0 / 27.0).abs() < 1e-15);
    }

    #[test]
    fn factors_lie_in_unit_interval() {
        let stats = stats();
        let pattern = Pattern::parse("c_t_a_").unwrap();
        for position in pattern.wildcard_positions() {
            for letter in b'a'..=b'z' {
                let f = slot_factors(&pattern, position, letter, &stats, Smoothing::default());
                for factor in [f.left, f.right, f.trigram].into_iter().flatten() {
                    assert!(factor > 0.0 && factor <= 1.0, "factor {factor} out of range");
                }
            }
        }
    }

    #[test]
    fn unknown_letter_uses_floor_prior() {
        let stats = stats();
        let pattern = Pattern::hidden(2);
        let scores = score_letters(&pattern, LetterSet::new(), &stats, Smoothing::default());

        assert!((scores.get(b'z').unwrap() - 2.0 * UNKNOWN_LETTER_PRIOR).abs() < 1e-24);
    }

    #[test]
    fn scores_sum_over_hidden_slots() {
        let stats = stats();
        let one = score_letters(
            &Pattern::hidden(1),
            LetterSet::new(),
            &stats,
            Smoothing::default(),
        );
        let three = score_letters(
            &Pattern::hidden(3),
            LetterSet::new(),
            &stats,
            Smoothing::default(),
        );
        let a1 = one.get(b'a').unwrap();
        let a3 = three.get(b'a').unwrap();
        assert!((a3 - 3.0 * a1).abs() < 1e-15);
    }

    #[test]
    fn context_lifts_letters_that_fit() {
        // 'e' dominates the unigram prior, but only 'u' ever follows 'q'
        let stats = NgramStats::build(&words_from_slice(&[
            "quiz", "quit", "quip", "quad", "squid", "tree", "free", "eel",
        ]));
        let guessed = LetterSet::parse("q").unwrap();

        let bare = score_letters(&Pattern::hidden(1), guessed, &stats, Smoothing::default());
        assert_eq!(bare.best().map(|(l, _)| l), Some(b'e'));

        let after_q = score_letters(
            &Pattern::parse("q_").unwrap(),
            guessed,
            &stats,
            Smoothing::default(),
        );
        assert_eq!(after_q.best().map(|(l, _)| l), Some(b'u'));
    }

    #[test]
    fn guessed_letters_are_excluded() {
        let stats = stats();
        let guessed = LetterSet::parse("act").unwrap();
        let scores = score_letters(
            &Pattern::parse("c__").unwrap(),
            guessed,
            &stats,
            Smoothing::default(),
        );
        assert_eq!(scores.letters(), guessed.complement());
    }

    #[test]
    fn empty_when_nothing_to_score() {
        let stats = stats();
        let complete = Pattern::parse("cat").unwrap();
        assert!(score_letters(&complete, LetterSet::new(), &stats, Smoothing::default()).is_empty());

        let open = Pattern::hidden(3);
        assert!(score_letters(&open, LetterSet::ALL, &stats, Smoothing::default()).is_empty());
    }

    #[test]
    fn empty_stats_still_score_with_floor() {
        let stats = NgramStats::build(&[]);
        let scores = score_letters(
            &Pattern::parse("a_").unwrap(),
            LetterSet::parse("a").unwrap(),
            &stats,
            Smoothing::default(),
        );
        // Every letter gets floor prior × 1/26
        let expected = UNKNOWN_LETTER_PRIOR / 26.0;
        assert!((scores.get(b'b').unwrap() - expected).abs() < 1e-24);
        assert_eq!(scores.len(), 25);
    }

    #[test]
    fn custom_smoothing_changes_denominator() {
        let smoothing = Smoothing::new(0.5, 30.0);
        assert!((smoothing.probability(2, 10) - 2.5 / 25.0).abs() < 1e-15);
    }
}
