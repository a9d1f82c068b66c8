//! Corpus loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Lines are trimmed and lowercased; blank or non-alphabetic lines are skipped.
/// Word order follows the file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::corpus::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Load and concatenate several word files, in order
///
/// # Errors
///
/// Returns the first I/O error encountered.
pub fn load_from_files<P: AsRef<Path>>(paths: &[P]) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();
    for path in paths {
        let loaded = load_from_file(path)?;
        log::debug!(
            "loaded {} words from {}",
            loaded.len(),
            path.as_ref().display()
        );
        words.extend(loaded);
    }
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_solver::corpus::loader::words_from_slice;
/// use hangman_solver::corpus::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cat", "Car", " can "];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "car");
        assert_eq!(words[2].text(), "can");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cat", "ice cream", "", "x-ray", "dog"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_corpus() {
        use crate::corpus::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn load_from_files_concatenates_in_order() {
        let dir = std::env::temp_dir();
        let first = dir.join(format!("hangman_loader_a_{}.txt", std::process::id()));
        let second = dir.join(format!("hangman_loader_b_{}.txt", std::process::id()));
        fs::write(&first, "delta\nalpha\n\n").unwrap();
        fs::write(&second, "Runway\n123\ngate\n").unwrap();

        let words = load_from_files(&[&first, &second]).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["delta", "alpha", "runway", "gate"]);

        fs::remove_file(first).unwrap();
        fs::remove_file(second).unwrap();
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_from_file("/nonexistent/hangman/words.txt").is_err());
    }
}
