//! Benchmark command
//!
//! Plays every selected dictionary word with each strategy and compares how
//! many wrong guesses they need. Games are independent, so they run in parallel.

use super::play::play_game;
use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{Solver, StrategyKind, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub strategies: Vec<StrategyKind>,
    /// Only play words of this length
    pub word_length: Option<usize>,
    /// Only play the first N selected words
    pub limit: Option<usize>,
    pub max_wrong_guesses: Option<usize>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: StrategyKind::ALL.to_vec(),
            word_length: None,
            limit: None,
            max_wrong_guesses: None,
            show_progress: true,
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a single benchmark game ended
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Solved { wrong: usize, guessed: usize },
    OutOfGuesses,
    Failed(SolverError),
}

/// Aggregated results for one strategy
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: StrategyKind,
    pub total_words: usize,
    pub solved: usize,
    pub out_of_guesses: usize,
    pub no_candidates: usize,
    pub exhausted: usize,
    pub total_wrong_guesses: usize,
    pub total_letters_guessed: usize,
    pub max_wrong_guesses: usize,
    /// Solved games keyed by wrong-guess count
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl BenchmarkResult {
    /// Mean wrong guesses over solved games
    #[must_use]
    pub fn average_wrong_guesses(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_wrong_guesses as f64 / self.solved as f64
        }
    }

    /// Mean letters guessed over solved games
    #[must_use]
    pub fn average_letters_guessed(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_letters_guessed as f64 / self.solved as f64
        }
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total_words - self.solved
    }
}

/// Words a benchmark will play, in dictionary order
#[must_use]
pub fn select_targets<'a>(dictionary: &'a [Word], config: &BenchmarkConfig) -> Vec<&'a Word> {
    dictionary
        .iter()
        .filter(|w| config.word_length.is_none_or(|len| w.len() == len))
        .take(config.limit.unwrap_or(usize::MAX))
        .collect()
}

/// Run every configured strategy over the selected words
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig, dictionary: &[Word]) -> Vec<BenchmarkResult> {
    let targets = select_targets(dictionary, config);
    info!(words = targets.len(), strategies = config.strategies.len(), "benchmark");

    config
        .strategies
        .iter()
        .map(|&kind| benchmark_strategy(kind, &targets, dictionary, config))
        .collect()
}

fn benchmark_strategy(
    kind: StrategyKind,
    targets: &[&Word],
    dictionary: &[Word],
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:>9} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_prefix(kind.name());

    let start = Instant::now();
    let outcomes: Vec<Outcome> = targets
        .par_iter()
        .map(|&target| {
            let outcome = play_target(kind, target, dictionary, config.max_wrong_guesses);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish();

    let mut result = BenchmarkResult {
        strategy: kind,
        total_words: targets.len(),
        solved: 0,
        out_of_guesses: 0,
        no_candidates: 0,
        exhausted: 0,
        total_wrong_guesses: 0,
        total_letters_guessed: 0,
        max_wrong_guesses: 0,
        distribution: BTreeMap::new(),
        duration: start.elapsed(),
    };

    for outcome in outcomes {
        match outcome {
            Outcome::Solved { wrong, guessed } => {
                result.solved += 1;
                result.total_wrong_guesses += wrong;
                result.total_letters_guessed += guessed;
                result.max_wrong_guesses = result.max_wrong_guesses.max(wrong);
                *result.distribution.entry(wrong).or_insert(0) += 1;
            }
            Outcome::OutOfGuesses => result.out_of_guesses += 1,
            Outcome::Failed(SolverError::NoCandidates { .. }) => result.no_candidates += 1,
            Outcome::Failed(SolverError::Exhausted) => result.exhausted += 1,
            Outcome::Failed(e) => warn!(strategy = %kind, "unexpected solver failure: {e}"),
        }
    }

    result
}

fn play_target(
    kind: StrategyKind,
    target: &Word,
    dictionary: &[Word],
    max_wrong_guesses: Option<usize>,
) -> Outcome {
    let answer = std::slice::from_ref(target);
    let lengths = [target.len()];
    let mut solver = Solver::new(kind.build(dictionary, &lengths), &lengths);

    match play_game(&mut solver, answer, kind, max_wrong_guesses, |_: &StrategyType| None) {
        Ok(game) if game.solved => Outcome::Solved {
            wrong: game.wrong_guesses,
            guessed: game.letters_guessed,
        },
        Ok(_) => Outcome::OutOfGuesses,
        Err(e) => Outcome::Failed(e),
    }
}
