//! Candidate filtering
//!
//! Narrows the corpus to the words consistent with the current pattern and the
//! letters already known to be absent.

use crate::core::{LetterSet, Pattern, Word};

/// Check whether `word` is consistent with `pattern` and `wrong_letters`
///
/// A word matches iff its length equals the pattern length, every revealed slot
/// holds the same letter, and no hidden slot holds a wrong letter.
#[must_use]
pub fn is_candidate(word: &Word, pattern: &Pattern, wrong_letters: LetterSet) -> bool {
    word.len() == pattern.len()
        && pattern
            .slots()
            .iter()
            .zip(word.bytes())
            .all(|(slot, &c)| match slot {
                Some(letter) => *letter == c,
                None => !wrong_letters.contains(c),
            })
}

/// Filter words to those consistent with the pattern and wrong letters
///
/// Preserves the input order. Accepts a corpus slice or an already-filtered
/// candidate list, so filtering can be re-applied.
///
/// # Examples
/// ```
/// use hangman_solver::core::{LetterSet, Pattern, Word};
/// use hangman_solver::solver::filter_candidates;
///
/// let corpus: Vec<Word> = ["cat", "car", "cut", "cart"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let pattern = Pattern::parse("_a_").unwrap();
/// let wrong = LetterSet::parse("r").unwrap();
///
/// let candidates = filter_candidates(&corpus, &pattern, wrong);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "cat");
/// ```
pub fn filter_candidates<'a, I>(
    words: I,
    pattern: &Pattern,
    wrong_letters: LetterSet,
) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| is_candidate(word, pattern, wrong_letters))
        .collect()
}
