//! Masked-word pattern and per-game state
//!
//! A pattern is the partially revealed secret: each slot is either a revealed
//! letter or a wildcard. The external wire form writes wildcards as `_` and may
//! separate slots with spaces, e.g. `"_ p p _ e"`.

use super::{LetterSet, MAX_WORD_LEN, Word};
use std::fmt;

/// Wildcard symbol used in the textual pattern form
pub const WILDCARD: char = '_';

/// Partially revealed secret word
///
/// `None` slots are wildcards, `Some(letter)` slots are revealed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<u8>>,
}

/// Error type for invalid patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    TooLong(usize),
    InvalidCharacter(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must have at least one slot"),
            Self::TooLong(len) => {
                write!(f, "Pattern must be at most {MAX_WORD_LEN} slots, got {len}")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "Pattern may only contain letters and '{WILDCARD}', got '{c}'")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Create a pattern of `len` wildcards (a fresh game)
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Parse the textual form of a pattern
    ///
    /// Spaces are ignored, `_` is a wildcard and letters are lowercased.
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern is empty, too long, or contains
    /// anything other than letters, wildcards and spaces.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::parse("_ p p _ E").unwrap();
    /// assert_eq!(pattern.len(), 5);
    /// assert_eq!(pattern.slot(1), Some(b'p'));
    /// assert_eq!(pattern.slot(0), None);
    /// assert_eq!(pattern.to_string(), "_pp_e");
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let slots = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                if c == WILDCARD {
                    return Ok(None);
                }
                let lower = c.to_ascii_lowercase();
                if lower.is_ascii_lowercase() {
                    Ok(Some(lower as u8))
                } else {
                    Err(PatternError::InvalidCharacter(c))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if slots.is_empty() {
            return Err(PatternError::Empty);
        }
        if slots.len() > MAX_WORD_LEN {
            return Err(PatternError::TooLong(slots.len()));
        }

        Ok(Self { slots })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The revealed letter at `position`, or `None` for a wildcard or out-of-range position
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    /// Positions still hidden
    pub fn wildcard_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
    }

    /// True once every slot has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Set of letters already revealed
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        self.slots.iter().flatten().copied().collect()
    }

    /// Reveal every slot where `secret` holds `letter`
    ///
    /// Returns the number of newly revealed slots (0 for a wrong guess).
    /// Used by the game loop only; the guess engine never mutates a pattern.
    pub fn reveal(&mut self, secret: &Word, letter: u8) -> usize {
        let mut revealed = 0;
        for (slot, &c) in self.slots.iter_mut().zip(secret.bytes()) {
            if c == letter && slot.is_none() {
                *slot = Some(letter);
                revealed += 1;
            }
        }
        revealed
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{}", *letter as char)?,
                None => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}

/// Complete state of one game at the moment a guess is requested
///
/// The engine is stateless: callers pass a fresh `GameState` for every guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub pattern: Pattern,
    pub guessed: LetterSet,
}

impl GameState {
    #[must_use]
    pub const fn new(pattern: Pattern, guessed: LetterSet) -> Self {
        Self { pattern, guessed }
    }

    /// Guessed letters that do not appear in the pattern
    #[must_use]
    pub fn wrong_letters(&self) -> LetterSet {
        self.guessed.difference(self.pattern.revealed_letters())
    }

    /// Letters that may still be guessed
    #[must_use]
    pub const fn remaining_letters(&self) -> LetterSet {
        self.guessed.complement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_spaces() {
        let spaced = Pattern::parse("_ a _").unwrap();
        let compact = Pattern::parse("_a_").unwrap();
        assert_eq!(spaced, compact);
        assert_eq!(spaced.slots(), &[None, Some(b'a'), None]);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(Pattern::parse("   "), Err(PatternError::Empty));
        assert_eq!(
            Pattern::parse("a*b"),
            Err(PatternError::InvalidCharacter('*'))
        );
        let long = "_".repeat(MAX_WORD_LEN + 1);
        assert_eq!(
            Pattern::parse(&long),
            Err(PatternError::TooLong(MAX_WORD_LEN + 1))
        );
    }

    #[test]
    fn hidden_pattern_has_only_wildcards() {
        let pattern = Pattern::hidden(4);
        assert_eq!(pattern.to_string(), "____");
        assert_eq!(pattern.wildcard_positions().count(), 4);
        assert!(!pattern.is_complete());
    }

    #[test]
    fn reveal_fills_all_occurrences() {
        let secret = Word::new("apple").unwrap();
        let mut pattern = Pattern::hidden(5);

        assert_eq!(pattern.reveal(&secret, b'p'), 2);
        assert_eq!(pattern.to_string(), "_pp__");

        // Already revealed and absent letters reveal nothing
        assert_eq!(pattern.reveal(&secret, b'p'), 0);
        assert_eq!(pattern.reveal(&secret, b'z'), 0);

        pattern.reveal(&secret, b'a');
        pattern.reveal(&secret, b'l');
        pattern.reveal(&secret, b'e');
        assert!(pattern.is_complete());
        assert_eq!(pattern.to_string(), "apple");
    }

    #[test]
    fn revealed_letters_and_wildcards() {
        let pattern = Pattern::parse("_pp_e").unwrap();
        assert_eq!(pattern.revealed_letters().to_string(), "ep");
        assert_eq!(pattern.wildcard_positions().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn wrong_letters_exclude_revealed() {
        let state = GameState::new(
            Pattern::parse("_pp_e").unwrap(),
            LetterSet::parse("eptz").unwrap(),
        );
        assert_eq!(state.wrong_letters().to_string(), "tz");
        assert_eq!(state.remaining_letters().len(), 22);
    }
}
