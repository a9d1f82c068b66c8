//! Display functions for command results

use super::formatters::{create_progress_bar, lives, spaced_pattern};
use crate::commands::{AnalysisResult, SolveResult, SuggestResult};
use colored::Colorize;

/// Print a single suggestion
pub fn print_suggestion(result: &SuggestResult) {
    println!(
        "\nPattern: {}   Guessed: {}",
        spaced_pattern(&result.state.pattern).bright_white().bold(),
        result.state.guessed.to_string().bright_black()
    );
    println!("Candidates: {}", result.candidates);

    let score = result
        .guess
        .score
        .map(|s| format!(" (score {s:.4})"))
        .unwrap_or_default();
    println!(
        "Next guess: {} via {}{}",
        result.guess.as_char().to_ascii_uppercase().to_string().bright_yellow().bold(),
        result.guess.source.to_string().cyan(),
        score
    );
}

/// Print the result of a game simulation
pub fn print_solve_result(result: &SolveResult, max_attempts: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut wrong = 0;
    for (i, step) in result.steps.iter().enumerate() {
        if !step.correct {
            wrong += 1;
        }
        let letter = (step.letter as char).to_ascii_uppercase().to_string();
        let letter = if step.correct {
            letter.green().bold()
        } else {
            letter.red().bold()
        };
        println!(
            "\nTurn {}: {}  {}  {}",
            i + 1,
            letter,
            spaced_pattern(&step.pattern),
            lives(wrong, max_attempts).red()
        );

        if verbose {
            println!("  Source:     {}", step.source);
            println!("  Candidates: {}", step.candidates_before);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses ({} wrong)",
                result.steps.len(),
                result.wrong_guesses
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed after {} wrong guesses", result.wrong_guesses)
                .red()
                .bold()
        );
    }
}

/// Print the result of game state analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER ANALYSIS:".bright_cyan().bold(),
        spaced_pattern(&result.state.pattern).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} candidates", result.total_candidates);
    if !result.sample.is_empty() {
        let more = if result.total_candidates > result.sample.len() {
            ", ..."
        } else {
            ""
        };
        println!("   {}{}", result.sample.join(", "), more);
    }

    let max_combined = result
        .letters
        .first()
        .map_or(0.0, |l| l.combined);

    println!(
        "\n   {:>6}  {:>8}  {:>5}  {:>8}  {:>10}",
        "letter", "entropy", "freq", "combined", "bayesian"
    );
    for letter in &result.letters {
        println!(
            "   {:>6}  {:>8.3}  {:>5}  {:>8.3}  {:>10.3e}  {}",
            (letter.letter as char).to_string(),
            letter.entropy,
            letter.frequency,
            letter.combined,
            letter.bayesian,
            create_progress_bar(letter.combined, max_combined, 20).green()
        );
    }

    match result.suggestion {
        Some(guess) => println!(
            "\n💡 Suggested: {} via {}",
            guess.as_char().to_ascii_uppercase().to_string().bright_yellow().bold(),
            guess.source
        ),
        None => println!("\n{}", "No guess possible".red()),
    }
}
