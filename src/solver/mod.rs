//! Hangman solving algorithms
//!
//! The [`Solver`] owns the guess/feedback protocol and delegates letter choice
//! to a [`Strategy`].

pub mod candidates;
mod engine;
pub mod pattern;
pub mod ranking;
pub mod strategy;

pub use candidates::CandidateSet;
pub use engine::Solver;
pub use pattern::PatternStrategy;
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyKind, StrategyType};
