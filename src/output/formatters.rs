//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Format a pattern with spaces between slots, e.g. `_ a _`
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    let text = pattern.to_string();
    let mut result = String::with_capacity(text.len() * 2);

    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c.to_ascii_uppercase());
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as hearts, e.g. `♥♥♥♡♡♡`
#[must_use]
pub fn lives(wrong: usize, max: usize) -> String {
    let left = max.saturating_sub(wrong);
    format!("{}{}", "♥".repeat(left), "♡".repeat(max - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_uppercases_letters() {
        let pattern = Pattern::parse("_pp_e").unwrap();
        assert_eq!(spaced_pattern(&pattern), "_ P P _ E");
    }

    #[test]
    fn spaced_single_slot() {
        assert_eq!(spaced_pattern(&Pattern::hidden(1)), "_");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn lives_counts_down() {
        assert_eq!(lives(0, 3), "♥♥♥");
        assert_eq!(lives(2, 3), "♥♡♡");
        assert_eq!(lives(5, 3), "♡♡♡");
    }
}
