//! Guess/feedback protocol
//!
//! The solver alternates strictly between proposing a letter and receiving the
//! positions where it occurs:
//!
//! ```text
//! AwaitingGuess --guess_letter--> AwaitingFeedback --receive_feedback--> AwaitingGuess
//! ```
//!
//! Once every cell is revealed the solver is solved and stays solved.

use super::strategy::Strategy;
use crate::core::{LetterSet, PartialSolution};
use crate::error::{ProtocolViolation, SolverError};
use tracing::trace;

/// Hangman solver driving a strategy through the guess/feedback protocol
#[derive(Debug, Clone)]
pub struct Solver<S: Strategy> {
    strategy: S,
    solution: PartialSolution,
    guessed: LetterSet,
    pending: Option<u8>,
    solved: bool,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver for an answer with the given slot lengths
    ///
    /// A single word has one slot; a phrase has one slot per word. An answer
    /// with no cells at all starts out solved.
    pub fn new(strategy: S, slot_lengths: &[usize]) -> Self {
        let solution = PartialSolution::new(slot_lengths);
        let solved = solution.is_complete();
        Self {
            strategy,
            solution,
            guessed: LetterSet::EMPTY,
            pending: None,
            solved,
        }
    }

    /// Propose the next letter
    ///
    /// The letter counts as guessed immediately, before any feedback.
    ///
    /// # Errors
    /// - `ProtocolViolation` if a guess is still awaiting feedback
    /// - any failure of the strategy (`Exhausted`, `NoCandidates`); the solver
    ///   state is left unchanged in that case
    pub fn guess_letter(&mut self) -> Result<u8, SolverError> {
        if let Some(pending) = self.pending {
            return Err(ProtocolViolation::GuessPending(pending as char).into());
        }

        let letter = self.strategy.select_letter(&self.solution, self.guessed)?;
        debug_assert!(
            !self.guessed.contains(letter),
            "strategy proposed '{}' twice",
            letter as char
        );

        self.guessed.insert(letter);
        self.pending = Some(letter);
        trace!(letter = %(letter as char), guesses = self.guessed.len(), "guessed");
        Ok(letter)
    }

    /// Apply feedback for the pending guess, one position list per slot
    ///
    /// Returns the number of cells newly revealed (0 for a wrong guess).
    ///
    /// # Errors
    /// - `ProtocolViolation` if no guess is pending
    /// - `InvalidFeedback` if the positions do not fit the solution; nothing
    ///   changes and the guess stays pending
    pub fn receive_feedback(&mut self, positions: &[Vec<usize>]) -> Result<usize, SolverError> {
        let letter = self.pending.ok_or(ProtocolViolation::NoPendingGuess)?;

        let revealed = self.solution.reveal(letter, positions)?;
        self.pending = None;
        if self.solution.is_complete() {
            self.solved = true;
        }

        trace!(letter = %(letter as char), revealed, solved = self.solved, "feedback");
        Ok(revealed)
    }

    /// Single-slot shorthand for [`receive_feedback`](Self::receive_feedback)
    ///
    /// # Errors
    /// Same as `receive_feedback`; a multi-slot solver rejects this with
    /// `InvalidFeedback`.
    pub fn receive_word_feedback(&mut self, positions: &[usize]) -> Result<usize, SolverError> {
        self.receive_feedback(&[positions.to_vec()])
    }

    /// Current partial solution
    pub const fn solution(&self) -> &PartialSolution {
        &self.solution
    }

    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Every letter proposed so far, including the pending one
    pub const fn guessed_letters(&self) -> LetterSet {
        self.guessed
    }

    pub const fn guess_count(&self) -> usize {
        self.guessed.len()
    }

    /// Letter awaiting feedback, if any
    pub const fn pending_guess(&self) -> Option<u8> {
        self.pending
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}
