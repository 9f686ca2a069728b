//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no solving logic.
//! Letters are plain uppercase ASCII bytes (`b'A'..=b'Z'`) throughout.

mod letters;
mod pattern;
mod solution;
mod word;

pub use letters::{ALPHABET, FREQUENCY_ORDER, LetterSet, frequency_rank};
pub use pattern::SlotPattern;
pub use solution::{Cell, PartialSolution};
pub use word::{Word, WordError};
