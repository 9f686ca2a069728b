//! Partially revealed answer
//!
//! The answer is a sequence of slots (one per word) and each slot a fixed
//! number of cells. Cells start unknown and are revealed by feedback; the
//! shape never changes and a revealed cell never changes again.

use crate::error::FeedbackError;
use std::fmt;

/// One character position: `Some(letter)` once revealed, `None` while unknown
pub type Cell = Option<u8>;

/// Rendering of an unknown cell
const UNKNOWN: char = '_';

/// Revealed state of every slot of the answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSolution {
    slots: Vec<Vec<Cell>>,
}

impl PartialSolution {
    /// Create an all-unknown solution with one slot per entry of `slot_lengths`
    #[must_use]
    pub fn new(slot_lengths: &[usize]) -> Self {
        Self {
            slots: slot_lengths.iter().map(|&len| vec![None; len]).collect(),
        }
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn slot_lengths(&self) -> Vec<usize> {
        self.slots.iter().map(Vec::len).collect()
    }

    /// Cells of one slot, or `None` if `index` is out of range
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&[Cell]> {
        self.slots.get(index).map(Vec::as_slice)
    }

    pub fn slots(&self) -> impl Iterator<Item = &[Cell]> {
        self.slots.iter().map(Vec::as_slice)
    }

    /// Number of revealed cells across all slots
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.slots.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Total number of cells across all slots
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// True when every cell of every slot is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().flatten().all(Option::is_some)
    }

    /// Reveal `letter` at the given positions, one position list per slot
    ///
    /// The whole request is checked before any cell changes, so an error leaves
    /// the solution untouched. Returns the number of cells newly revealed.
    pub(crate) fn reveal(
        &mut self,
        letter: u8,
        positions: &[Vec<usize>],
    ) -> Result<usize, FeedbackError> {
        if positions.len() != self.slots.len() {
            return Err(FeedbackError::SlotCountMismatch {
                expected: self.slots.len(),
                got: positions.len(),
            });
        }

        for (slot, (cells, hits)) in self.slots.iter().zip(positions).enumerate() {
            for &position in hits {
                match cells.get(position) {
                    None => {
                        return Err(FeedbackError::PositionOutOfRange {
                            slot,
                            position,
                            len: cells.len(),
                        });
                    }
                    Some(Some(existing)) if *existing != letter => {
                        return Err(FeedbackError::ConflictingCell {
                            slot,
                            position,
                            existing: *existing as char,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        let mut revealed = 0;
        for (cells, hits) in self.slots.iter_mut().zip(positions) {
            for &position in hits {
                if cells[position].replace(letter).is_none() {
                    revealed += 1;
                }
            }
        }
        Ok(revealed)
    }
}

impl fmt::Display for PartialSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, "   ")?;
            }
            for (j, cell) in slot.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.map_or(UNKNOWN, char::from))?;
            }
        }
        Ok(())
    }
}
