//! Letter sets over the 26-letter lowercase alphabet
//!
//! Guessed letters, wrong letters and the letters present in a word are all
//! represented as a 26-bit mask. Iteration is always alphabetical, which keeps
//! every scan over the alphabet deterministic.

use std::fmt;

/// Number of letters in the supported alphabet
pub const ALPHABET_SIZE: usize = 26;

const FULL_MASK: u32 = (1 << ALPHABET_SIZE) - 1;

/// Index of a lowercase ASCII letter (`b'a'` → 0), or `None` for anything else
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

/// Error type for letter lists that contain something other than letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    InvalidCharacter(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => write!(f, "'{c}' is not a letter"),
        }
    }
}

impl std::error::Error for LetterError {}

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALL: Self = Self(FULL_MASK);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Parse a free-form list of letters such as `"a, e, s"`, `"a e s"` or `"aes"`
    ///
    /// Letters are lowercased. Whitespace and commas separate entries.
    ///
    /// # Errors
    /// Returns `LetterError::InvalidCharacter` for any other character.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::LetterSet;
    ///
    /// let guessed = LetterSet::parse("E, a,S").unwrap();
    /// assert_eq!(guessed.to_string(), "aes");
    /// assert!(LetterSet::parse("a1").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, LetterError> {
        let mut set = Self::new();
        for c in text.chars() {
            if c.is_whitespace() || c == ',' {
                continue;
            }
            let lower = c.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(LetterError::InvalidCharacter(c));
            }
            set.insert(lower as u8);
        }
        Ok(set)
    }

    /// Add a letter; returns `false` if it was already present or is not a lowercase letter
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(i) => {
                let bit = 1 << i;
                let added = self.0 & bit == 0;
                self.0 |= bit;
                added
            }
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(i) => self.0 & (1 << i) != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters of the alphabet not in this set
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & FULL_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(|i| b'a' + i)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
