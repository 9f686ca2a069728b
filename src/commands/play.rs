//! Single game command
//!
//! Plays one game of Hangman: the driver knows the answer, the solver only
//! knows the slot lengths and learns through feedback.

use crate::core::{Word, WordError};
use crate::error::SolverError;
use crate::solver::{Solver, Strategy, StrategyKind, StrategyType};
use anyhow::{Context, Result};
use tracing::info;

/// Configuration for playing a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub answer: String,
    /// Stop after this many wrong guesses (unlimited when `None`)
    pub max_wrong_guesses: Option<usize>,
}

impl GameConfig {
    #[must_use]
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            max_wrong_guesses: None,
        }
    }

    #[must_use]
    pub const fn with_max_wrong_guesses(mut self, limit: usize) -> Self {
        self.max_wrong_guesses = Some(limit);
        self
    }
}

/// One guess and what it revealed
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub letter: char,
    /// Cells revealed by this guess (0 for a miss)
    pub hits: usize,
    /// Rendered solution after feedback
    pub solution: String,
    /// Remaining candidates per slot when the letter was chosen
    pub candidates: Option<Vec<usize>>,
}

/// Result of playing a game
#[derive(Debug, Clone)]
pub struct GameResult {
    pub answer: String,
    pub strategy: StrategyKind,
    pub turns: Vec<TurnRecord>,
    pub solved: bool,
    pub wrong_guesses: usize,
    pub letters_guessed: usize,
    pub budget_exhausted: bool,
    pub solution: String,
}

/// Split an answer phrase into its words
///
/// # Errors
/// Returns `WordError` if the phrase is blank or a word contains non-letters.
pub fn parse_answer(answer: &str) -> Result<Vec<Word>, WordError> {
    let words = answer
        .split_whitespace()
        .map(Word::new)
        .collect::<Result<Vec<_>, _>>()?;
    if words.is_empty() {
        return Err(WordError::Empty);
    }
    Ok(words)
}

/// Slot lengths of an answer, the only thing a solver is told
#[must_use]
pub fn slot_lengths(answer: &[Word]) -> Vec<usize> {
    answer.iter().map(Word::len).collect()
}

/// Play a configured game with a freshly built strategy
///
/// # Errors
///
/// Returns an error if:
/// - The answer is not made of plain letters
/// - The strategy fails (no candidates left, letters exhausted)
pub fn play(config: &GameConfig, kind: StrategyKind, dictionary: &[Word]) -> Result<GameResult> {
    let answer = parse_answer(&config.answer)
        .with_context(|| format!("Invalid answer '{}'", config.answer))?;
    let lengths = slot_lengths(&answer);

    info!(strategy = %kind, slots = ?lengths, "starting game");
    let mut solver = Solver::new(kind.build(dictionary, &lengths), &lengths);

    let result = play_game(
        &mut solver,
        &answer,
        kind,
        config.max_wrong_guesses,
        StrategyType::candidate_counts,
    )
    .with_context(|| format!("Solver failed on '{}' with the {kind} strategy", config.answer))?;

    info!(
        solved = result.solved,
        wrong = result.wrong_guesses,
        guessed = result.letters_guessed,
        "game finished"
    );
    Ok(result)
}

/// Drive a solver against a known answer until solved or out of guesses
///
/// `candidates` reads the strategy's remaining candidate counts for the turn log.
///
/// # Errors
/// Any solver error is returned as-is; nothing is retried.
pub fn play_game<S, F>(
    solver: &mut Solver<S>,
    answer: &[Word],
    strategy: StrategyKind,
    max_wrong_guesses: Option<usize>,
    candidates: F,
) -> Result<GameResult, SolverError>
where
    S: Strategy,
    F: Fn(&S) -> Option<Vec<usize>>,
{
    let mut turns = Vec::new();
    let mut wrong_guesses = 0;
    let mut budget_exhausted = false;

    while !solver.is_solved() {
        let letter = solver.guess_letter()?;
        let remaining = candidates(solver.strategy());

        let positions: Vec<Vec<usize>> = answer.iter().map(|w| w.positions_of(letter)).collect();
        let hits = solver.receive_feedback(&positions)?;
        if hits == 0 {
            wrong_guesses += 1;
        }

        turns.push(TurnRecord {
            letter: letter as char,
            hits,
            solution: solver.solution().to_string(),
            candidates: remaining,
        });

        if !solver.is_solved() && max_wrong_guesses.is_some_and(|limit| wrong_guesses >= limit) {
            budget_exhausted = true;
            break;
        }
    }

    Ok(GameResult {
        answer: answer
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join(" "),
        strategy,
        turns,
        solved: solver.is_solved(),
        wrong_guesses,
        letters_guessed: solver.guess_count(),
        budget_exhausted,
        solution: solver.solution().to_string(),
    })
}
