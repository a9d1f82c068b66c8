//! Letter n-gram statistics
//!
//! Unigram probabilities plus bigram/trigram counts over a corpus, with the
//! marginal sums needed for smoothed conditional probabilities. Built once per
//! corpus in a single pass and read-only afterwards.

use crate::core::{ALPHABET_SIZE, LetterSet, Word, letter_index};
use rustc_hash::FxHashMap;

/// Letter statistics derived from a corpus
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NgramStats {
    unigram_counts: [u64; ALPHABET_SIZE],
    total_letters: u64,
    bigram: FxHashMap<(u8, u8), u64>,
    trigram: FxHashMap<(u8, u8, u8), u64>,
    bigram_next_sum: [u64; ALPHABET_SIZE],
    bigram_prev_sum: [u64; ALPHABET_SIZE],
    trigram_lr_sum: FxHashMap<(u8, u8), u64>,
}

impl NgramStats {
    /// Build statistics from an ordered list of words
    ///
    /// Deterministic: the same words always produce identical statistics.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::corpus::loader::words_from_slice;
    /// use hangman_solver::solver::NgramStats;
    ///
    /// let words = words_from_slice(&["cat", "car"]);
    /// let stats = NgramStats::build(&words);
    ///
    /// assert_eq!(stats.bigram_count(b'c', b'a'), 2);
    /// assert_eq!(stats.trigram_count(b'c', b'a', b't'), 1);
    /// assert!((stats.unigram_probability(b'a').unwrap() - 2.0 / 6.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut stats = Self::default();

        for word in words {
            let bytes = word.bytes();
            for (i, &c) in bytes.iter().enumerate() {
                if let Some(idx) = letter_index(c) {
                    stats.unigram_counts[idx] += 1;
                    stats.total_letters += 1;
                }
                if i > 0 {
                    *stats.bigram.entry((bytes[i - 1], c)).or_insert(0) += 1;
                }
                if i > 1 {
                    *stats
                        .trigram
                        .entry((bytes[i - 2], bytes[i - 1], c))
                        .or_insert(0) += 1;
                }
            }
        }

        // Marginals are exact aggregates of the count tables
        for (&(a, b), &count) in &stats.bigram {
            if let Some(i) = letter_index(a) {
                stats.bigram_next_sum[i] += count;
            }
            if let Some(i) = letter_index(b) {
                stats.bigram_prev_sum[i] += count;
            }
        }
        for (&(a, _, c), &count) in &stats.trigram {
            *stats.trigram_lr_sum.entry((a, c)).or_insert(0) += count;
        }

        log::debug!(
            "built n-gram stats from {} words: {} letters, {} bigrams, {} trigrams",
            words.len(),
            stats.total_letters,
            stats.bigram.len(),
            stats.trigram.len()
        );

        stats
    }

    /// True when no letters were observed (e.g. built from an empty corpus)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_letters == 0
    }

    /// Total number of letters observed
    #[must_use]
    pub const fn total_letters(&self) -> u64 {
        self.total_letters
    }

    /// Probability of `letter` among all observed letters
    ///
    /// Returns `None` if the letter was never observed.
    #[must_use]
    pub fn unigram_probability(&self, letter: u8) -> Option<f64> {
        let count = letter_index(letter).map_or(0, |i| self.unigram_counts[i]);
        (count > 0).then(|| count as f64 / self.total_letters as f64)
    }

    /// Letters observed at least once
    #[must_use]
    pub fn observed_letters(&self) -> LetterSet {
        (b'a'..=b'z')
            .filter(|&letter| self.unigram_probability(letter).is_some())
            .collect()
    }

    #[must_use]
    pub fn bigram_count(&self, first: u8, second: u8) -> u64 {
        self.bigram.get(&(first, second)).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn trigram_count(&self, first: u8, middle: u8, last: u8) -> u64 {
        self.trigram
            .get(&(first, middle, last))
            .copied()
            .unwrap_or(0)
    }

    /// Total bigram occurrences where `letter` is the first member
    #[must_use]
    pub fn bigram_next_sum(&self, letter: u8) -> u64 {
        letter_index(letter).map_or(0, |i| self.bigram_next_sum[i])
    }

    /// Total bigram occurrences where `letter` is the second member
    #[must_use]
    pub fn bigram_prev_sum(&self, letter: u8) -> u64 {
        letter_index(letter).map_or(0, |i| self.bigram_prev_sum[i])
    }

    /// Total trigram occurrences with `first` and `last` around any middle letter
    #[must_use]
    pub fn trigram_lr_sum(&self, first: u8, last: u8) -> u64 {
        self.trigram_lr_sum
            .get(&(first, last))
            .copied()
            .unwrap_or(0)
    }
}
