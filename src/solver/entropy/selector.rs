//! Entropy-plus-frequency letter selection
//!
//! Scores every unguessed letter by information gain blended with document
//! frequency, and picks the highest-scoring one.

use super::calculator::calculate_metrics;
use crate::core::{LetterSet, Word};
use crate::solver::ScoreMap;
use rayon::prelude::*;

/// Score every unguessed letter against the candidates
///
/// The score is `entropy + weight_freq * frequency`. Letters are scored in
/// parallel; the resulting map is independent of scheduling. Returns an empty
/// map when there are no candidates or no unguessed letters.
///
/// # Examples
/// ```
/// use hangman_solver::core::{LetterSet, Word};
/// use hangman_solver::solver::entropy::score_letters;
///
/// let candidates = vec![Word::new("cat").unwrap(), Word::new("car").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
/// let guessed = LetterSet::parse("a").unwrap();
///
/// let scores = score_letters(&candidate_refs, guessed, 0.5);
/// assert_eq!(scores.len(), 25);
/// assert_eq!(scores.get(b'a'), None);
/// assert!(scores.get(b'c').unwrap() > scores.get(b'z').unwrap());
/// ```
#[must_use]
pub fn score_letters(candidates: &[&Word], guessed: LetterSet, weight_freq: f64) -> ScoreMap {
    if candidates.is_empty() {
        return ScoreMap::new();
    }

    let letters: Vec<u8> = guessed.complement().iter().collect();

    letters
        .par_iter()
        .map(|&letter| {
            let metrics = calculate_metrics(letter, candidates, weight_freq);
            (letter, metrics.combined)
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Select the best letter by maximizing the blended score
///
/// Returns the letter and its score, or `None` if there are no candidates or
/// every letter has been guessed. Ties go to the alphabetically first letter.
#[must_use]
pub fn select_best_letter(
    candidates: &[&Word],
    guessed: LetterSet,
    weight_freq: f64,
) -> Option<(u8, f64)> {
    score_letters(candidates, guessed, weight_freq).best()
}
