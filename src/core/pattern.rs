//! Per-cell constraint pattern for one slot
//!
//! A pattern is what an anchored regex like `^[^ET]E[^ET][^ET]$` would express,
//! built directly from the partial slot and the guessed letters:
//! - a revealed cell matches only its own letter
//! - an unknown cell matches any letter that has not been guessed yet
//!
//! Excluding every guessed letter from unknown cells (correct ones included)
//! is what lets a single pass carry both wrong guesses and "all occurrences of
//! a right guess are already revealed" into the pruning.

use super::{Cell, LetterSet};
use std::fmt;

/// Compiled matcher for one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPattern {
    cells: Vec<Cell>,
    wildcard: LetterSet,
}

impl SlotPattern {
    /// Build the pattern for a partial slot given the letters guessed so far
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{LetterSet, SlotPattern};
    ///
    /// let guessed: LetterSet = b"ES".iter().copied().collect();
    /// let pattern = SlotPattern::new(&[None, Some(b'E'), None, None], guessed);
    ///
    /// assert!(pattern.matches(b"TEXT"));
    /// assert!(!pattern.matches(b"BEST")); // S was guessed, cannot sit in an unknown cell
    /// assert!(!pattern.matches(b"TENTS")); // wrong length
    /// ```
    #[must_use]
    pub fn new(cells: &[Cell], guessed: LetterSet) -> Self {
        Self {
            cells: cells.to_vec(),
            wildcard: guessed.complement(),
        }
    }

    /// Number of cells the pattern spans
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whole-word match: same length, and every cell accepts its letter
    #[must_use]
    pub fn matches(&self, word: &[u8]) -> bool {
        word.len() == self.cells.len()
            && self
                .cells
                .iter()
                .zip(word)
                .all(|(cell, &letter)| match cell {
                    Some(known) => *known == letter,
                    None => self.wildcard.contains(letter),
                })
    }
}

impl fmt::Display for SlotPattern {
    /// Regex-style rendering, e.g. `[^ES]E[^ES][^ES]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let excluded = self.wildcard.complement();
        for cell in &self.cells {
            match cell {
                Some(letter) => write!(f, "{}", *letter as char)?,
                None if excluded.is_empty() => write!(f, "[A-Z]")?,
                None => write!(f, "[^{excluded}]")?,
            }
        }
        Ok(())
    }
}
