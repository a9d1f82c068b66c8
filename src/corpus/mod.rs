//! Corpus store for Hangman solving
//!
//! Provides an embedded default corpus compiled into the binary, plus loaders
//! for external word lists. A corpus is an ordered, immutable list of words.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn corpus_is_not_empty() {
        assert!(WORDS_COUNT > 0);
    }

    #[test]
    fn words_are_lowercase_alphabetic() {
        for &word in WORDS {
            assert!(!word.is_empty(), "Empty word in corpus");
            assert!(
                word.bytes().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn corpus_contains_common_words() {
        for word in ["cat", "car", "can", "apple", "airport"] {
            assert!(WORDS.contains(&word), "Missing '{word}'");
        }
    }
}
