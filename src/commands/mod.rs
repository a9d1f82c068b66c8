//! Command implementations

pub mod analyze;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, LetterAnalysis, analyze_state};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{SuggestResult, parse_state, suggest};
