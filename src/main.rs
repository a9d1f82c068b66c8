//! Hangman Solver - CLI
//!
//! Suggests the next letter for a Hangman game, analyzes a game state, or plays
//! a full game against a known word.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{SolveConfig, analyze_state, solve_word, suggest},
    core::Word,
    corpus::{
        WORDS,
        loader::{load_from_files, words_from_slice},
    },
    output::{print_analysis_result, print_solve_result, print_suggestion},
    solver::{NgramStats, Solver, SolverConfig, Strategy, StrategyType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman letter guesser using entropy and smoothed n-gram statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: combo (default), entropy, bayesian, unigram, random
    #[arg(short, long, global = true, default_value = "combo")]
    strategy: String,

    /// Word list file, one word per line; repeat to combine (default: built-in list)
    #[arg(short, long, global = true)]
    corpus: Vec<PathBuf>,

    /// Weight of letter frequency in the entropy score
    #[arg(long, global = true, default_value_t = SolverConfig::DEFAULT_WEIGHT_FREQ)]
    weight_freq: f64,

    /// Smoothing constant for n-gram probabilities
    #[arg(long, global = true, default_value_t = SolverConfig::DEFAULT_ALPHA)]
    alpha: f64,

    /// Seed for the random fallback
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the next letter for a pattern like "_ p p _ e"
    Suggest {
        /// Revealed pattern, '_' for hidden letters
        pattern: String,

        /// Letters already guessed, e.g. "aeprs"
        #[arg(short, long, default_value = "")]
        guessed: String,
    },

    /// Show how every unguessed letter scores for a pattern
    Analyze {
        /// Revealed pattern, '_' for hidden letters
        pattern: String,

        /// Letters already guessed
        #[arg(short, long, default_value = "")]
        guessed: String,
    },

    /// Play a full game against a known secret word
    Solve {
        /// The secret word
        secret: String,

        /// Wrong guesses allowed
        #[arg(short, long, default_value_t = SolveConfig::DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,

        /// Show the source and candidate count of every guess
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Load the corpus from the given files, or the built-in list if none
fn load_corpus(paths: &[PathBuf]) -> Result<Vec<Word>> {
    let words = if paths.is_empty() {
        words_from_slice(WORDS)
    } else {
        load_from_files(paths)?
    };

    if words.is_empty() {
        bail!("No words available: the corpus is empty");
    }
    log::debug!("loaded {} corpus words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SolverConfig::new(
        cli.weight_freq,
        cli.alpha,
        SolverConfig::DEFAULT_ALPHABET_SIZE,
    )?;
    let corpus = load_corpus(&cli.corpus)?;
    let stats = NgramStats::build(&corpus);

    let strategy = StrategyType::from_name(&cli.strategy);
    if strategy.name() != cli.strategy {
        log::warn!("unknown strategy '{}', using {}", cli.strategy, strategy.name());
    }
    let solver = Solver::new(strategy, &corpus, &stats).with_config(config);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    match cli.command {
        Commands::Suggest { pattern, guessed } => {
            run_suggest_command(&pattern, &guessed, &solver, &mut rng)
        }
        Commands::Analyze { pattern, guessed } => {
            run_analyze_command(&pattern, &guessed, &solver, &mut rng)
        }
        Commands::Solve {
            secret,
            max_attempts,
            verbose,
        } => run_solve_command(secret, max_attempts, verbose, &solver, &mut rng),
    }
}

fn run_suggest_command<S: Strategy>(
    pattern: &str,
    guessed: &str,
    solver: &Solver<S>,
    rng: &mut StdRng,
) -> Result<()> {
    let result = suggest(pattern, guessed, solver, rng).map_err(|e| anyhow::anyhow!(e))?;
    print_suggestion(&result);
    Ok(())
}

fn run_analyze_command<S: Strategy>(
    pattern: &str,
    guessed: &str,
    solver: &Solver<S>,
    rng: &mut StdRng,
) -> Result<()> {
    let result = analyze_state(pattern, guessed, solver, rng).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_solve_command<S: Strategy>(
    secret: String,
    max_attempts: usize,
    verbose: bool,
    solver: &Solver<S>,
    rng: &mut StdRng,
) -> Result<()> {
    let config = SolveConfig {
        secret,
        max_attempts,
    };
    let result = solve_word(config, solver, rng).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, max_attempts, verbose);
    Ok(())
}
