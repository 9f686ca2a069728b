//! Letter alphabet, frequency order and a compact letter set
//!
//! A `LetterSet` stores any subset of A-Z as a 26-bit mask, which keeps
//! guessed-letter bookkeeping and candidate letter unions allocation-free.

use std::fmt;

/// The 26 uppercase letters in alphabetical order
pub const ALPHABET: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letters ranked by typical English usage, most common first
pub const FREQUENCY_ORDER: [u8; 26] = *b"ETAOINSRHDLUCMFYWGPBVKXQJZ";

/// Position of `letter` in [`FREQUENCY_ORDER`] (0 = most common)
///
/// Returns `None` for anything that is not an uppercase ASCII letter.
#[must_use]
pub fn frequency_rank(letter: u8) -> Option<usize> {
    FREQUENCY_ORDER.iter().position(|&l| l == letter)
}

/// A set of uppercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter A-Z
    pub const ALL: Self = Self((1 << 26) - 1);

    #[inline]
    const fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_uppercase() {
            Some(1 << (letter - b'A'))
        } else {
            None
        }
    }

    /// Add a letter, returning `true` if it was not already present
    ///
    /// Non-letters are ignored and return `false`.
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Letters A-Z not in `self`
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::ALL.difference(self)
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        ALPHABET.into_iter().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
