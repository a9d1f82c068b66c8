//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod letters;
mod pattern;
mod word;

pub use letters::{ALPHABET_SIZE, LetterError, LetterSet, letter_index};
pub use pattern::{GameState, Pattern, PatternError, WILDCARD};
pub use word::{MAX_WORD_LEN, Word, WordError};
