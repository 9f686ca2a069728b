//! Display functions for command results

use super::formatters::{create_progress_bar, format_candidate_counts, percent};
use crate::commands::{BenchmarkResult, GameResult, SuggestResult};
use colored::Colorize;

/// Print a game transcript
pub fn print_game_result(result: &GameResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Answer:   {}", result.answer.bright_yellow().bold());
    println!("Strategy: {}", result.strategy.to_string().bright_cyan());
    println!("{}", "─".repeat(60).cyan());

    let mut previous = String::new();
    for (i, turn) in result.turns.iter().enumerate() {
        let marker = if turn.hits > 0 {
            format!("✓ {}", turn.hits).green()
        } else {
            "✗".red()
        };
        print!("{:>3}. {} {marker}", i + 1, turn.letter.to_string().bold());

        if verbose && let Some(counts) = &turn.candidates {
            print!("  ({} candidates)", format_candidate_counts(counts));
        }
        println!();

        if turn.solution != previous {
            println!("     {}", turn.solution.bright_white());
            previous.clone_from(&turn.solution);
        }
    }

    println!();
    println!("Solver says:     {}", result.solution.bright_white().bold());
    println!("Letters guessed: {}", result.letters_guessed);
    println!("Wrong guesses:   {}", result.wrong_guesses);

    if result.solved {
        println!("{}", "✅ Solved!".green().bold());
    } else if result.budget_exhausted {
        println!(
            "{}",
            format!("❌ Hanged after {} wrong guesses", result.wrong_guesses)
                .red()
                .bold()
        );
    }
}

/// Print the results of a benchmark run
pub fn print_benchmark_results(results: &[BenchmarkResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        println!("\n📊 {}", result.strategy.to_string().bright_cyan().bold());
        println!("   Words played:      {}", result.total_words);
        println!(
            "   Solved:            {} ({:.1}%)",
            result.solved.to_string().green(),
            percent(result.solved, result.total_words)
        );
        if result.failed() > 0 {
            println!(
                "   Failed:            {} (hanged {}, no candidates {}, exhausted {})",
                result.failed().to_string().red(),
                result.out_of_guesses,
                result.no_candidates,
                result.exhausted
            );
        }
        println!(
            "   Avg wrong guesses: {}",
            format!("{:.2}", result.average_wrong_guesses())
                .bright_yellow()
                .bold()
        );
        println!("   Avg letters:       {:.2}", result.average_letters_guessed());
        println!("   Worst case:        {}", result.max_wrong_guesses);
        println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());

        if !result.distribution.is_empty() {
            println!("   Wrong-guess distribution:");
            for (&wrong, &count) in &result.distribution {
                let pct = percent(count, result.solved);
                let bar = create_progress_bar(pct, 100.0, 30);
                println!("   {wrong:>3}: {} {count:5} ({pct:5.1}%)", bar.green());
            }
        }
    }
}

/// Print prefix completions
pub fn print_suggestions(result: &SuggestResult) {
    if result.words.is_empty() {
        println!("No words start with {}", result.prefix.bright_yellow());
        return;
    }

    println!(
        "{} word(s) start with {}:",
        result.total,
        result.prefix.bright_yellow().bold()
    );
    for word in &result.words {
        println!("  • {word}");
    }
    if result.words.len() < result.total {
        println!(
            "  {}",
            format!("… and {} more", result.total - result.words.len()).bright_black()
        );
    }
}
