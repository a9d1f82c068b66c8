//! Hangman guessing algorithms
//!
//! This module contains the candidate filter, the letter scorers and the
//! strategies that combine them into one guess per game state.

pub mod bayesian;
mod engine;
pub mod entropy;
pub mod fallback;
mod filter;
mod ngram;
mod score;
pub mod strategy;

pub use engine::{
    ConfigError, Guess, GuessContext, GuessError, GuessSource, Solver, SolverConfig, decide,
};
pub use fallback::fallback;
pub use filter::{filter_candidates, is_candidate};
pub use ngram::NgramStats;
pub use score::ScoreMap;
pub use strategy::{
    BayesianStrategy, ComboStrategy, EntropyStrategy, RandomStrategy, Strategy, StrategyType,
    UnigramStrategy,
};
