//! Fallback letter selection
//!
//! Guarantees a guess when richer scorers have nothing to offer: global unigram
//! frequency first, then a uniform random unguessed letter, and finally an
//! explicit exhausted signal when no letter is left.

use super::{GuessError, GuessSource, NgramStats};
use crate::core::LetterSet;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Most frequent unguessed letter in the corpus
///
/// Compares `(probability, letter)` pairs, so on an exact probability tie the
/// alphabetically later letter wins. Returns `None` if no unguessed letter was
/// ever observed.
#[must_use]
pub fn unigram_letter(stats: &NgramStats, guessed: LetterSet) -> Option<u8> {
    guessed
        .complement()
        .iter()
        .filter_map(|letter| stats.unigram_probability(letter).map(|p| (p, letter)))
        .max_by(|(p1, l1), (p2, l2)| p1.total_cmp(p2).then(l1.cmp(l2)))
        .map(|(_, letter)| letter)
}

/// Uniformly random unguessed letter, or `None` if every letter was guessed
pub fn random_letter<R: Rng + ?Sized>(guessed: LetterSet, rng: &mut R) -> Option<u8> {
    let remaining: Vec<u8> = guessed.complement().iter().collect();
    remaining.choose(rng).copied()
}

/// Unigram fallback, then random, then `Exhausted`
///
/// # Errors
/// Returns `GuessError::Exhausted` when all 26 letters have been guessed.
///
/// # Examples
/// ```
/// use hangman_solver::core::LetterSet;
/// use hangman_solver::corpus::loader::words_from_slice;
/// use hangman_solver::solver::{GuessError, GuessSource, NgramStats, fallback};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let stats = NgramStats::build(&words_from_slice(&["eerie", "tree"]));
/// let mut rng = StdRng::seed_from_u64(7);
///
/// assert_eq!(fallback(&stats, LetterSet::new(), &mut rng), Ok((b'e', GuessSource::Unigram)));
/// assert_eq!(fallback(&stats, LetterSet::ALL, &mut rng), Err(GuessError::Exhausted));
/// ```
pub fn fallback<R: Rng + ?Sized>(
    stats: &NgramStats,
    guessed: LetterSet,
    rng: &mut R,
) -> Result<(u8, GuessSource), GuessError> {
    if let Some(letter) = unigram_letter(stats, guessed) {
        return Ok((letter, GuessSource::Unigram));
    }

    match random_letter(guessed, rng) {
        Some(letter) => {
            log::warn!("no usable unigram statistics, guessing '{}' at random", letter as char);
            Ok((letter, GuessSource::Random))
        }
        None => Err(GuessError::Exhausted),
    }
}
