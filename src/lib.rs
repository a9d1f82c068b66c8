//! Hangman Solver
//!
//! Picks the next letter in a game of Hangman using information theory over a
//! word corpus, with a smoothed n-gram model for words the corpus does not know.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{GameState, LetterSet, Pattern};
//! use hangman_solver::corpus::{WORDS, loader::words_from_slice};
//! use hangman_solver::solver::{NgramStats, Solver, StrategyType};
//!
//! let corpus = words_from_slice(WORDS);
//! let stats = NgramStats::build(&corpus);
//! let solver = Solver::new(StrategyType::default(), &corpus, &stats);
//!
//! let state = GameState::new(Pattern::parse("_ p p _ e").unwrap(), LetterSet::parse("p e").unwrap());
//! let guess = solver.next_guess(&state, &mut rand::rng()).unwrap();
//! println!("Next guess: {}", guess.as_char());
//! ```

// Core domain types
pub mod core;

// Guess engine
pub mod solver;

// Word corpus
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
