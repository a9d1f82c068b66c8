//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations. `ComboStrategy` is
//! the default decision path; the others are alternate policies kept for
//! comparison and testing.

use super::engine::{self, Guess, GuessContext, GuessError, GuessSource};
use super::{bayesian, entropy, fallback};
use rand::Rng;

/// A strategy for selecting the next letter for one game state
pub trait Strategy {
    /// Select a letter not yet guessed
    ///
    /// # Errors
    /// Returns `GuessError::Exhausted` when no letter is left to guess.
    fn select_letter<R: Rng + ?Sized>(
        &self,
        ctx: &GuessContext<'_>,
        rng: &mut R,
    ) -> Result<Guess, GuessError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Entropy → Bayesian → fallback (default)
    #[default]
    Combo,
    /// Entropy when candidates exist, otherwise unigram fallback
    Entropy,
    /// Bayesian n-gram scoring regardless of candidates
    Bayesian,
    /// Most frequent unguessed letter
    Unigram,
    /// Uniform random unguessed letter
    Random,
}

impl Strategy for StrategyType {
    fn select_letter<R: Rng + ?Sized>(
        &self,
        ctx: &GuessContext<'_>,
        rng: &mut R,
    ) -> Result<Guess, GuessError> {
        match self {
            Self::Combo => ComboStrategy.select_letter(ctx, rng),
            Self::Entropy => EntropyStrategy.select_letter(ctx, rng),
            Self::Bayesian => BayesianStrategy.select_letter(ctx, rng),
            Self::Unigram => UnigramStrategy.select_letter(ctx, rng),
            Self::Random => RandomStrategy.select_letter(ctx, rng),
        }
    }
}

impl StrategyType {
    /// All strategy names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 5] = ["combo", "entropy", "bayesian", "unigram", "random"];

    /// Create strategy from name string
    ///
    /// Supported names: "combo", "entropy", "bayesian", "unigram", "random".
    /// Defaults to combo if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" => Self::Entropy,
            "bayesian" => Self::Bayesian,
            "unigram" => Self::Unigram,
            "random" => Self::Random,
            _ => Self::Combo,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Combo => "combo",
            Self::Entropy => "entropy",
            Self::Bayesian => "bayesian",
            Self::Unigram => "unigram",
            Self::Random => "random",
        }
    }
}

/// Default decision path: entropy, then Bayesian, then fallback
pub struct ComboStrategy;

impl Strategy for ComboStrategy {
    fn select_letter<R: Rng + ?Sized>(
        &self,
        ctx: &GuessContext<'_>,
        rng: &mut R,
    ) -> Result<Guess, GuessError> {
        engine::decide(ctx, rng)
    }
}

/// Entropy+frequency over candidates, unigram fallback when none match
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_letter<R: Rng + ?Sized>(
        &self,
        ctx: &GuessContext<'_>,
        rng: &mut R,
    ) -> Result<Guess, GuessError> {
        let candidates = ctx.candidates();
        if let Some((letter, score)) =
            entropy::select_best_letter(&candidates, ctx.state.guessed, ctx.config.weight_freq)
        {
            return Ok(Guess::scored(letter, GuessSource::Entropy, score));
        }
        UnigramStrategy.select_letter(ctx, rng)
    }
}

/// Bayesian n-gram posterior from the pattern alone, unigram fallback when empty
pub struct BayesianStrategy;

impl Strategy for BayesianStrategy {
    fn select_letter<R: Rng + ?Sized>(
        &self,
        ctx: &GuessContext<'_>,
        rng: &mut R,
    ) -> Result<Guess, GuessError> {
        let scores = bayesian::score_letters(
            &ctx.state.pattern,
            ctx.state.guessed,
            ctx.stats,
            ctx.config.smoothing(),
        );
        if let Some((letter, score)) = scores.best() {
            return Ok(Guess::scored(letter, GuessSource::Bayesian, score));
        }
        UnigramStrategy.select_letter(ctx, rng)
    }
}

/// Global unigram frequency, degrading to random
pub struct UnigramStrategy;

impl Strategy for UnigramStrategy {
    fn select_letter<R: Rng + ?Sized>(
        &self,
        ctx: &GuessContext<'_>,
        rng: &mut R,
    ) -> Result<Guess, GuessError> {
        fallback::fallback(ctx.stats, ctx.state.guessed, rng)
            .map(|(letter, source)| Guess::unscored(letter, source))
    }
}

/// Random strategy
///
/// Uniformly random unguessed letter. Baseline for comparisons.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter<R: Rng + ?Sized>(
        &self,
        ctx: &GuessContext<'_>,
        rng: &mut R,
    ) -> Result<Guess, GuessError> {
        fallback::random_letter(ctx.state.guessed, rng)
            .map(|letter| Guess::unscored(letter, GuessSource::Random))
            .ok_or(GuessError::Exhausted)
    }
}
