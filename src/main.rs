//! Hangman Solver - CLI
//!
//! Plays Hangman against a known answer with a selectable guessing strategy.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{BenchmarkConfig, GameConfig, play, run_benchmark, suggest_words},
    core::Word,
    output::{print_benchmark_results, print_game_result, print_suggestions},
    solver::StrategyKind,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver with frequency, random and dictionary-pruning strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: regex (default), frequency, random
    #[arg(short, long, global = true, default_value = "regex")]
    strategy: String,

    /// Wordlist: 'builtin' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Log solver decisions (same as RUST_LOG=hangman_solver=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a hidden word or phrase (default: "test")
    Play {
        /// The answer the solver has to uncover
        #[arg(default_value = "test")]
        answer: String,

        /// Give up after this many wrong guesses
        #[arg(short, long)]
        max_wrong: Option<usize>,
    },

    /// Play every dictionary word and compare strategies
    Benchmark {
        /// Number of words to play
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Only play words of this length
        #[arg(short, long)]
        length: Option<usize>,

        /// Compare all strategies instead of only --strategy
        #[arg(short, long)]
        all: bool,

        /// Give up after this many wrong guesses
        #[arg(short, long)]
        max_wrong: Option<usize>,
    },

    /// List dictionary words starting with a prefix
    Suggest {
        prefix: String,

        /// Show at most this many words
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={default_level}", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let strategy: StrategyKind = cli.strategy.parse()?;
    let dictionary = load_dictionary(&cli.wordlist)?;
    info!(words = dictionary.len(), "dictionary loaded");

    let command = cli.command.unwrap_or(Commands::Play {
        answer: "test".to_string(),
        max_wrong: None,
    });

    match command {
        Commands::Play { answer, max_wrong } => {
            let mut config = GameConfig::new(answer);
            config.max_wrong_guesses = max_wrong;
            let result = play(&config, strategy, &dictionary)?;
            print_game_result(&result, cli.verbose);
        }
        Commands::Benchmark {
            count,
            length,
            all,
            max_wrong,
        } => {
            let config = BenchmarkConfig {
                strategies: if all {
                    StrategyKind::ALL.to_vec()
                } else {
                    vec![strategy]
                },
                word_length: length,
                limit: count,
                max_wrong_guesses: max_wrong,
                show_progress: true,
            };
            let results = run_benchmark(&config, &dictionary);
            print_benchmark_results(&results);
        }
        Commands::Suggest { prefix, limit } => {
            let result = suggest_words(&dictionary, &prefix, Some(limit));
            print_suggestions(&result);
        }
    }

    Ok(())
}
