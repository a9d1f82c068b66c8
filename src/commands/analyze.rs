//! Game state analysis command
//!
//! Breaks down how every unguessed letter scores for one game state.

use super::suggest::parse_state;
use crate::core::GameState;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Guess, Solver, Strategy, bayesian};
use rand::Rng;

/// Maximum number of candidate words included in the result
pub const SAMPLE_SIZE: usize = 10;

/// Scores for one letter
pub struct LetterAnalysis {
    pub letter: u8,
    pub entropy: f64,
    pub frequency: usize,
    pub combined: f64,
    pub bayesian: f64,
}

/// Result of analyzing a game state
pub struct AnalysisResult {
    pub state: GameState,
    pub total_candidates: usize,
    pub sample: Vec<String>,
    /// Unguessed letters, best combined score first
    pub letters: Vec<LetterAnalysis>,
    /// Letter the solver would choose; `None` if no guess is possible
    pub suggestion: Option<Guess>,
}

/// Analyze the given pattern and guessed letters
///
/// # Errors
///
/// Returns an error if the pattern or guessed letters are invalid.
pub fn analyze_state<S: Strategy, R: Rng + ?Sized>(
    pattern: &str,
    guessed: &str,
    solver: &Solver<S>,
    rng: &mut R,
) -> Result<AnalysisResult, String> {
    let state = parse_state(pattern, guessed)?;
    let candidates = solver.get_candidates(&state);
    let config = solver.config();

    let bayesian_scores = bayesian::score_letters(
        &state.pattern,
        state.guessed,
        solver.stats(),
        config.smoothing(),
    );

    let mut letters: Vec<LetterAnalysis> = state
        .remaining_letters()
        .iter()
        .map(|letter| {
            let metrics = calculate_metrics(letter, &candidates, config.weight_freq);
            LetterAnalysis {
                letter,
                entropy: metrics.entropy,
                frequency: metrics.frequency,
                combined: metrics.combined,
                bayesian: bayesian_scores.get(letter).unwrap_or(0.0),
            }
        })
        .collect();

    letters.sort_by(|a, b| {
        b.combined
            .total_cmp(&a.combined)
            .then(b.bayesian.total_cmp(&a.bayesian))
    });

    let suggestion = solver.next_guess(&state, rng).ok();

    Ok(AnalysisResult {
        total_candidates: candidates.len(),
        sample: candidates
            .iter()
            .take(SAMPLE_SIZE)
            .map(|w| w.text().to_string())
            .collect(),
        letters,
        suggestion,
        state,
    })
}
