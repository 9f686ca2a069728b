//! Letter ranking policy
//!
//! Ties between candidate letters are always broken by the fixed global
//! English frequency order, never by how often a letter occurs among the
//! remaining candidates.

use crate::core::{FREQUENCY_ORDER, LetterSet};

/// The most common English letter in `letters`
///
/// Returns `None` if the set is empty.
///
/// # Examples
/// ```
/// use hangman_solver::core::LetterSet;
/// use hangman_solver::solver::ranking::most_common;
///
/// let letters: LetterSet = b"ZRT".iter().copied().collect();
/// assert_eq!(most_common(letters), Some(b'T'));
/// ```
#[must_use]
pub fn most_common(letters: LetterSet) -> Option<u8> {
    ranked(letters).next()
}

/// Letters of the set in frequency order, most common first
pub fn ranked(letters: LetterSet) -> impl Iterator<Item = u8> {
    FREQUENCY_ORDER
        .into_iter()
        .filter(move |&letter| letters.contains(letter))
}
