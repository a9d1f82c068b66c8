//! Game simulation command
//!
//! Plays one game against a known secret word and returns every guess made.

use crate::core::{GameState, LetterSet, Pattern, Word};
use crate::solver::{GuessSource, Solver, Strategy};
use rand::Rng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    /// Wrong guesses allowed before the game is lost
    pub max_attempts: usize,
}

impl SolveConfig {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: String,
    pub wrong_guesses: usize,
}

/// A single guess in the game
pub struct GuessStep {
    pub letter: u8,
    pub source: GuessSource,
    pub correct: bool,
    pub candidates_before: usize,
    /// Pattern after the guess was applied
    pub pattern: Pattern,
}

/// Play a game against `config.secret` with the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret word is invalid (empty, non-alphabetic or too long)
/// - The solver cannot provide a guess before the game ends
pub fn solve_word<S: Strategy, R: Rng + ?Sized>(
    config: SolveConfig,
    solver: &Solver<S>,
    rng: &mut R,
) -> Result<SolveResult, String> {
    let secret = Word::new(config.secret.as_str()).map_err(|e| format!("Invalid secret word: {e}"))?;

    let mut state = GameState::new(Pattern::hidden(secret.len()), LetterSet::new());
    let mut steps = Vec::new();
    let mut wrong_guesses = 0;

    while wrong_guesses < config.max_attempts && !state.pattern.is_complete() {
        let candidates_before = solver.count_candidates(&state);
        let guess = solver.next_guess(&state, rng).map_err(|e| e.to_string())?;

        state.guessed.insert(guess.letter);
        let correct = state.pattern.reveal(&secret, guess.letter) > 0;
        if !correct {
            wrong_guesses += 1;
        }

        log::debug!(
            "guess '{}' ({}) -> {} [{} wrong]",
            guess.as_char(),
            guess.source,
            state.pattern,
            wrong_guesses
        );

        steps.push(GuessStep {
            letter: guess.letter,
            source: guess.source,
            correct,
            candidates_before,
            pattern: state.pattern.clone(),
        });
    }

    Ok(SolveResult {
        success: state.pattern.is_complete(),
        steps,
        secret: secret.text().to_string(),
        wrong_guesses,
    })
}
