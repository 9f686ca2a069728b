//! Hangman Solver
//!
//! Plays the guessing side of Hangman: given only the length of each word in a
//! hidden phrase, it proposes letters one at a time and narrows a dictionary
//! of candidates from the right/wrong feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::solver::{PatternStrategy, Solver};
//! use hangman_solver::wordlists::loader::words_from_slice;
//!
//! let dictionary = words_from_slice(&["test", "best", "rest", "nest"]);
//! let mut solver = Solver::new(PatternStrategy::single(&dictionary, 4), &[4]);
//!
//! let letter = solver.guess_letter().unwrap();
//! assert_eq!(letter, b'E');
//!
//! // E is the second letter of the hidden word
//! solver.receive_word_feedback(&[1]).unwrap();
//! assert_eq!(solver.solution().to_string(), "_ E _ _");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Guessing strategies and the guess/feedback protocol
pub mod solver;

// Prefix index
pub mod index;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
