//! Dictionary word representation
//!
//! A Word is a non-empty run of uppercase ASCII letters. Dictionary entries are
//! normalized on construction so the rest of the solver only ever compares bytes.

use super::LetterSet;
use std::fmt;
use thiserror::Error;

/// An uppercase dictionary word of any length
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("hangman").unwrap();
    /// assert_eq!(word.text(), "HANGMAN");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("don't").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; a Word cannot be constructed empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// Get all positions where a letter appears
    #[must_use]
    pub fn positions_of(&self, letter: u8) -> Vec<usize> {
        self.letters()
            .iter()
            .enumerate()
            .filter_map(|(i, &l)| (l == letter).then_some(i))
            .collect()
    }

    /// Distinct letters in the word
    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.letters().iter().copied().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("test").unwrap().text(), "TEST");
        assert_eq!(Word::new("TeSt").unwrap().text(), "TEST");
        assert_eq!(Word::new("  nest\n").unwrap().text(), "NEST");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
        assert_eq!(Word::new("o'clock"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("r2d2"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letters_and_len() {
        let word = Word::new("card").unwrap();
        assert_eq!(word.letters(), b"CARD");
        assert_eq!(word.len(), 4);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("letter").unwrap();
        assert_eq!(word.positions_of(b'T'), vec![2, 3]);
        assert_eq!(word.positions_of(b'E'), vec![1, 4]);
        assert!(word.positions_of(b'Z').is_empty());
        assert!(word.has_letter(b'R'));
        assert!(!word.has_letter(b'r'));
    }

    #[test]
    fn word_letter_set() {
        let word = Word::new("banana").unwrap();
        assert_eq!(word.letter_set().to_string(), "ABN");
    }

    #[test]
    fn word_display() {
        let word = Word::new("hangman").unwrap();
        assert_eq!(format!("{word}"), "HANGMAN");
    }
}
