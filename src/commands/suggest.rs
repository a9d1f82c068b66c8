//! Next-letter suggestion command
//!
//! Parses the game state supplied by the caller and asks the solver for one
//! letter.

use crate::core::{GameState, LetterSet, Pattern};
use crate::solver::{Guess, Solver, Strategy};
use rand::Rng;

/// Result of a suggestion request
pub struct SuggestResult {
    pub state: GameState,
    pub candidates: usize,
    pub guess: Guess,
}

/// Build a game state from a pattern string and a list of guessed letters
///
/// Letters already revealed in the pattern count as guessed.
///
/// # Errors
///
/// Returns an error if the pattern or the guessed letters cannot be parsed.
pub fn parse_state(pattern: &str, guessed: &str) -> Result<GameState, String> {
    let pattern = Pattern::parse(pattern).map_err(|e| format!("Invalid pattern: {e}"))?;
    let guessed = LetterSet::parse(guessed).map_err(|e| format!("Invalid guessed letters: {e}"))?;
    let guessed = guessed.union(pattern.revealed_letters());
    Ok(GameState::new(pattern, guessed))
}

/// Suggest the next letter for the given pattern and guessed letters
///
/// # Errors
///
/// Returns an error if:
/// - The pattern or guessed letters are invalid
/// - The pattern is already complete
/// - Every letter has already been guessed
pub fn suggest<S: Strategy, R: Rng + ?Sized>(
    pattern: &str,
    guessed: &str,
    solver: &Solver<S>,
    rng: &mut R,
) -> Result<SuggestResult, String> {
    let state = parse_state(pattern, guessed)?;
    let candidates = solver.count_candidates(&state);
    let guess = solver.next_guess(&state, rng).map_err(|e| e.to_string())?;

    Ok(SuggestResult {
        state,
        candidates,
        guess,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::loader::words_from_slice;
    use crate::solver::{GuessSource, NgramStats, StrategyType};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_state_counts_revealed_as_guessed() {
        let state = parse_state("_ a _", "t").unwrap();
        assert_eq!(state.guessed, LetterSet::parse("at").unwrap());
        assert_eq!(state.wrong_letters(), LetterSet::parse("t").unwrap());
    }

    #[test]
    fn parse_state_rejects_bad_input() {
        assert!(parse_state("_a?", "").is_err());
        assert!(parse_state("", "").is_err());
        assert!(parse_state("_a_", "t1").is_err());
    }

    #[test]
    fn suggest_for_cat_car_can() {
        let corpus = words_from_slice(&["cat", "car", "can"]);
        let stats = NgramStats::build(&corpus);
        let solver = Solver::new(StrategyType::default(), &corpus, &stats);
        let mut rng = StdRng::seed_from_u64(0);

        let result = suggest("_a_", "", &solver, &mut rng).unwrap();

        assert_eq!(result.candidates, 3);
        assert_eq!(result.guess.letter, b'c');
        assert_eq!(result.guess.source, GuessSource::Entropy);
    }

    #[test]
    fn suggest_on_complete_pattern_is_an_error() {
        let corpus = words_from_slice(&["cat"]);
        let stats = NgramStats::build(&corpus);
        let solver = Solver::new(StrategyType::default(), &corpus, &stats);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(suggest("cat", "", &solver, &mut rng).is_err());
    }
}
