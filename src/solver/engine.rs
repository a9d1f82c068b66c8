//! Main Hangman solver interface
//!
//! The default decision path is an explicit state machine:
//!
//! ```text
//! FilterCandidates ─┬─ candidates  → EntropyScore ──────────────→ letter
//!                   └─ none        → BayesianScore ─┬─ scored  → letter
//!                                                   └─ nothing → Fallback → letter | Exhausted
//! ```

use super::bayesian::{self, Smoothing};
use super::strategy::Strategy;
use super::{NgramStats, entropy, fallback, filter_candidates};
use crate::core::{GameState, Word};
use rand::Rng;
use std::fmt;

/// Tunable parameters of the guess engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Weight of document frequency in the entropy blend (default: 0.5)
    pub weight_freq: f64,
    /// Add-alpha smoothing constant for n-gram likelihoods (default: 1.0)
    pub alpha: f64,
    /// Vocabulary size used in the smoothing denominator (default: 26)
    pub alphabet_size: f64,
}

/// Rejected solver configuration values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Blend weight is negative or not finite
    InvalidWeight(f64),
    /// Smoothing constant is not a positive finite number
    InvalidAlpha(f64),
    /// Smoothing vocabulary size is not a positive finite number
    InvalidAlphabetSize(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeight(v) => {
                write!(f, "Frequency weight must be a finite number >= 0, got {v}")
            }
            Self::InvalidAlpha(v) => write!(f, "Smoothing alpha must be a finite number > 0, got {v}"),
            Self::InvalidAlphabetSize(v) => {
                write!(f, "Alphabet size must be a finite number > 0, got {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SolverConfig {
    pub const DEFAULT_WEIGHT_FREQ: f64 = 0.5;
    pub const DEFAULT_ALPHA: f64 = 1.0;
    pub const DEFAULT_ALPHABET_SIZE: f64 = 26.0;

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if `weight_freq` is negative, if `alpha` or
    /// `alphabet_size` is not strictly positive, or if any value is NaN or
    /// infinite.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::{ConfigError, SolverConfig};
    ///
    /// assert!(SolverConfig::new(0.5, 1.0, 26.0).is_ok());
    /// assert_eq!(SolverConfig::new(0.5, 0.0, 26.0), Err(ConfigError::InvalidAlpha(0.0)));
    /// ```
    pub fn new(weight_freq: f64, alpha: f64, alphabet_size: f64) -> Result<Self, ConfigError> {
        let config = Self {
            weight_freq,
            alpha,
            alphabet_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every value keeps the scorers well defined
    ///
    /// # Errors
    /// See [`SolverConfig::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weight_freq.is_finite() || self.weight_freq < 0.0 {
            return Err(ConfigError::InvalidWeight(self.weight_freq));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }
        if !self.alphabet_size.is_finite() || self.alphabet_size <= 0.0 {
            return Err(ConfigError::InvalidAlphabetSize(self.alphabet_size));
        }
        Ok(())
    }

    /// Smoothing parameters for the Bayesian scorer
    #[must_use]
    pub const fn smoothing(&self) -> Smoothing {
        Smoothing::new(self.alpha, self.alphabet_size)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            weight_freq: Self::DEFAULT_WEIGHT_FREQ,
            alpha: Self::DEFAULT_ALPHA,
            alphabet_size: Self::DEFAULT_ALPHABET_SIZE,
        }
    }
}

/// Which stage produced a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessSource {
    Entropy,
    Bayesian,
    Unigram,
    Random,
}

impl fmt::Display for GuessSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entropy => "entropy",
            Self::Bayesian => "bayesian",
            Self::Unigram => "unigram",
            Self::Random => "random",
        };
        write!(f, "{name}")
    }
}

/// Conditions under which no guess is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Every letter of the alphabet has already been guessed
    Exhausted,
    /// The pattern has no hidden slot left, so there is nothing to guess
    PatternComplete,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "No valid guess: every letter has been guessed"),
            Self::PatternComplete => write!(f, "No guess needed: the word is fully revealed"),
        }
    }
}

impl std::error::Error for GuessError {}

/// A selected letter and how it was chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guess {
    pub letter: u8,
    pub source: GuessSource,
    /// Winning score for scored stages; `None` for fallbacks
    pub score: Option<f64>,
}

impl Guess {
    #[must_use]
    pub const fn scored(letter: u8, source: GuessSource, score: f64) -> Self {
        Self {
            letter,
            source,
            score: Some(score),
        }
    }

    #[must_use]
    pub const fn unscored(letter: u8, source: GuessSource) -> Self {
        Self {
            letter,
            source,
            score: None,
        }
    }

    #[must_use]
    pub const fn as_char(&self) -> char {
        self.letter as char
    }
}

/// Everything a strategy needs to pick one letter
#[derive(Debug, Clone, Copy)]
pub struct GuessContext<'a> {
    pub corpus: &'a [Word],
    pub stats: &'a NgramStats,
    pub config: SolverConfig,
    pub state: &'a GameState,
}

impl<'a> GuessContext<'a> {
    /// Corpus words consistent with the pattern and wrong letters
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        filter_candidates(
            self.corpus,
            &self.state.pattern,
            self.state.wrong_letters(),
        )
    }
}

/// Stages of the default decision path
enum Stage<'a> {
    FilterCandidates,
    EntropyScore(Vec<&'a Word>),
    BayesianScore,
    Fallback,
}

/// Run the default decision path for one guess
///
/// Entropy+frequency when at least one corpus word fits, the Bayesian n-gram
/// scorer otherwise, and the unigram/random fallback when neither scores.
///
/// # Errors
/// - `GuessError::PatternComplete` if the pattern has no hidden slot
/// - `GuessError::Exhausted` if every letter has been guessed
pub fn decide<R: Rng + ?Sized>(ctx: &GuessContext<'_>, rng: &mut R) -> Result<Guess, GuessError> {
    let state = ctx.state;
    let mut stage = Stage::FilterCandidates;

    loop {
        stage = match stage {
            Stage::FilterCandidates => {
                if state.pattern.is_complete() {
                    return Err(GuessError::PatternComplete);
                }
                let candidates = ctx.candidates();
                log::debug!(
                    "pattern {} guessed [{}] wrong [{}]: {} candidates",
                    state.pattern,
                    state.guessed,
                    state.wrong_letters(),
                    candidates.len()
                );
                if candidates.is_empty() {
                    Stage::BayesianScore
                } else {
                    Stage::EntropyScore(candidates)
                }
            }
            Stage::EntropyScore(candidates) => {
                match entropy::select_best_letter(&candidates, state.guessed, ctx.config.weight_freq)
                {
                    Some((letter, score)) => {
                        log::debug!("entropy picked '{}' ({score:.4})", letter as char);
                        return Ok(Guess::scored(letter, GuessSource::Entropy, score));
                    }
                    None => Stage::Fallback,
                }
            }
            Stage::BayesianScore => {
                let scores = bayesian::score_letters(
                    &state.pattern,
                    state.guessed,
                    ctx.stats,
                    ctx.config.smoothing(),
                );
                match scores.best() {
                    Some((letter, score)) => {
                        log::debug!("bayesian picked '{}' ({score:.3e})", letter as char);
                        return Ok(Guess::scored(letter, GuessSource::Bayesian, score));
                    }
                    None => Stage::Fallback,
                }
            }
            Stage::Fallback => {
                let (letter, source) = fallback::fallback(ctx.stats, state.guessed, rng)?;
                log::debug!("{source} fallback picked '{}'", letter as char);
                return Ok(Guess::unscored(letter, source));
            }
        };
    }
}

/// Main Hangman solver
///
/// Borrows a read-only corpus and its statistics, and answers one guess per
/// call from the full game state. Holds no per-game state, so one solver can
/// serve any number of concurrent games.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    corpus: &'a [Word],
    stats: &'a NgramStats,
    config: SolverConfig,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy, corpus and statistics
    ///
    /// # Parameters
    /// - `strategy`: The letter selection strategy to use
    /// - `corpus`: Words used for candidate filtering
    /// - `stats`: N-gram statistics built from the same corpus
    pub fn new(strategy: S, corpus: &'a [Word], stats: &'a NgramStats) -> Self {
        Self {
            strategy,
            corpus,
            stats,
            config: SolverConfig::default(),
        }
    }

    /// Replace the default configuration
    ///
    /// The configuration is expected to have passed [`SolverConfig::validate`].
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    #[must_use]
    pub const fn stats(&self) -> &'a NgramStats {
        self.stats
    }

    fn context<'s>(&self, state: &'s GameState) -> GuessContext<'s>
    where
        'a: 's,
    {
        GuessContext {
            corpus: self.corpus,
            stats: self.stats,
            config: self.config,
            state,
        }
    }

    /// Get the next guess for the given game state
    ///
    /// The returned letter is never in `state.guessed`.
    ///
    /// # Errors
    /// - `GuessError::PatternComplete` if the pattern has no hidden slot
    /// - `GuessError::Exhausted` if every letter has been guessed
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{GameState, LetterSet, Pattern};
    /// use hangman_solver::corpus::loader::words_from_slice;
    /// use hangman_solver::solver::{GuessSource, NgramStats, Solver, StrategyType};
    ///
    /// let corpus = words_from_slice(&["cat", "car", "can"]);
    /// let stats = NgramStats::build(&corpus);
    /// let solver = Solver::new(StrategyType::default(), &corpus, &stats);
    ///
    /// let state = GameState::new(Pattern::parse("_a_").unwrap(), LetterSet::parse("a").unwrap());
    /// let guess = solver.next_guess(&state, &mut rand::rng()).unwrap();
    /// assert_eq!(guess.as_char(), 'c');
    /// assert_eq!(guess.source, GuessSource::Entropy);
    /// ```
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        rng: &mut R,
    ) -> Result<Guess, GuessError> {
        if state.pattern.is_complete() {
            return Err(GuessError::PatternComplete);
        }
        let guess = self.strategy.select_letter(&self.context(state), rng)?;
        debug_assert!(!state.guessed.contains(guess.letter));
        Ok(guess)
    }

    /// Corpus words consistent with the given state
    pub fn get_candidates(&self, state: &GameState) -> Vec<&'a Word> {
        filter_candidates(self.corpus, &state.pattern, state.wrong_letters())
    }

    /// Count how many corpus words remain consistent with the given state
    pub fn count_candidates(&self, state: &GameState) -> usize {
        self.get_candidates(state).len()
    }
}
