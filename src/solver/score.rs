//! Per-letter score maps
//!
//! Every scorer produces a `ScoreMap`: a real-valued score for each letter it
//! considered. Selection takes the maximum, with ties going to the letter that
//! comes first alphabetically.

use crate::core::{ALPHABET_SIZE, LetterSet, letter_index};

/// Mapping from letter to score; unscored letters are absent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreMap {
    scores: [Option<f64>; ALPHABET_SIZE],
}

impl ScoreMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score of a letter, replacing any previous value
    pub fn insert(&mut self, letter: u8, score: f64) {
        if let Some(i) = letter_index(letter) {
            self.scores[i] = Some(score);
        }
    }

    /// Add to the score of a letter, starting from 0 if it was unscored
    pub fn accumulate(&mut self, letter: u8, score: f64) {
        if let Some(i) = letter_index(letter) {
            *self.scores[i].get_or_insert(0.0) += score;
        }
    }

    #[must_use]
    pub fn get(&self, letter: u8) -> Option<f64> {
        letter_index(letter).and_then(|i| self.scores[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.iter().all(Option::is_none)
    }

    /// Letters that carry a score
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.iter().map(|(letter, _)| letter).collect()
    }

    /// Scored letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .filter_map(|(i, score)| score.map(|s| (b'a' + i as u8, s)))
    }

    /// Highest-scoring letter and its score
    ///
    /// Ties go to the alphabetically first letter. NaN scores are never
    /// selected. Returns `None` when no letter has a comparable score.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::ScoreMap;
    ///
    /// let mut scores = ScoreMap::new();
    /// scores.insert(b'r', 1.5);
    /// scores.insert(b't', 1.5);
    /// scores.insert(b'e', 0.2);
    /// assert_eq!(scores.best(), Some((b'r', 1.5)));
    /// ```
    #[must_use]
    pub fn best(&self) -> Option<(u8, f64)> {
        self.iter()
            .filter(|(_, score)| !score.is_nan())
            .fold(None, |best, (letter, score)| match best {
                Some((_, best_score)) if score.total_cmp(&best_score).is_le() => best,
                _ => Some((letter, score)),
            })
    }
}

impl FromIterator<(u8, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (u8, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (letter, score) in iter {
            map.insert(letter, score);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_has_no_best() {
        let scores = ScoreMap::new();
        assert!(scores.is_empty());
        assert_eq!(scores.len(), 0);
        assert_eq!(scores.best(), None);
    }

    #[test]
    fn best_picks_maximum() {
        let scores: ScoreMap = [(b'a', 0.1), (b'm', 3.0), (b'z', 2.0)].into_iter().collect();
        assert_eq!(scores.best(), Some((b'm', 3.0)));
    }

    #[test]
    fn ties_go_to_first_letter() {
        let scores: ScoreMap = [(b'z', 1.0), (b'c', 1.0), (b'q', 1.0)].into_iter().collect();
        assert_eq!(scores.best(), Some((b'c', 1.0)));
    }

    #[test]
    fn zero_scores_are_still_selectable() {
        let scores: ScoreMap = [(b'x', 0.0), (b'y', 0.0)].into_iter().collect();
        assert_eq!(scores.best(), Some((b'x', 0.0)));
    }

    #[test]
    fn nan_scores_are_skipped() {
        let scores: ScoreMap = [(b'a', 1.0), (b'b', f64::NAN), (b'z', f64::NAN)]
            .into_iter()
            .collect();
        assert_eq!(scores.best(), Some((b'a', 1.0)));

        let only_nan: ScoreMap = [(b'q', f64::NAN)].into_iter().collect();
        assert_eq!(only_nan.best(), None);
    }

    #[test]
    fn accumulate_sums_values() {
        let mut scores = ScoreMap::new();
        scores.accumulate(b'e', 0.25);
        scores.accumulate(b'e', 0.5);
        assert_eq!(scores.get(b'e'), Some(0.75));
        assert_eq!(scores.get(b'f'), None);
    }

    #[test]
    fn iter_is_alphabetical() {
        let scores: ScoreMap = [(b't', 1.0), (b'b', 2.0)].into_iter().collect();
        let letters: Vec<u8> = scores.iter().map(|(l, _)| l).collect();
        assert_eq!(letters, vec![b'b', b't']);
        assert_eq!(scores.letters().to_string(), "bt");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut scores = ScoreMap::new();
        scores.insert(b'_', 1.0);
        scores.accumulate(b'A', 1.0);
        assert!(scores.is_empty());
    }
}
