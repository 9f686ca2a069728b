//! Error types for the solving core
//!
//! Every failure here is terminal for the current solving attempt. Nothing is
//! retried automatically; the driver decides whether to abort or record a loss.

use thiserror::Error;

/// Failures surfaced by solvers and strategies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Guess/feedback calls arrived out of turn (a driver bug)
    #[error("protocol violation: {0}")]
    ProtocolViolation(#[from] ProtocolViolation),

    /// The constraints on a slot rule out every dictionary word
    #[error("no dictionary words match slot {slot}")]
    NoCandidates { slot: usize },

    /// A strategy was built for a different number of slots than the solver
    #[error("strategy tracks {strategy} slot(s) but the answer has {solution}")]
    SlotCountMismatch { strategy: usize, solution: usize },

    /// No un-guessed letters remain to propose
    #[error("no letters left to guess")]
    Exhausted,

    /// An unrecognized strategy name was requested
    #[error("unknown strategy '{0}' (expected one of: frequency, random, regex)")]
    InvalidStrategy(String),

    /// Feedback that cannot apply to the current solution
    #[error("invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
}

/// Out-of-turn protocol calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProtocolViolation {
    #[error("must provide feedback for '{0}' before guessing another letter")]
    GuessPending(char),
    #[error("must guess a letter before sending feedback")]
    NoPendingGuess,
}

/// Feedback that does not fit the partial solution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("expected positions for {expected} slot(s), got {got}")]
    SlotCountMismatch { expected: usize, got: usize },
    #[error("position {position} is outside slot {slot} (length {len})")]
    PositionOutOfRange {
        slot: usize,
        position: usize,
        len: usize,
    },
    #[error("slot {slot} position {position} is already revealed as '{existing}'")]
    ConflictingCell {
        slot: usize,
        position: usize,
        existing: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            SolverError::from(ProtocolViolation::GuessPending('E')).to_string(),
            "protocol violation: must provide feedback for 'E' before guessing another letter"
        );
        assert_eq!(
            SolverError::NoCandidates { slot: 1 }.to_string(),
            "no dictionary words match slot 1"
        );
        assert_eq!(
            SolverError::InvalidStrategy("smart".into()).to_string(),
            "unknown strategy 'smart' (expected one of: frequency, random, regex)"
        );
    }
}
