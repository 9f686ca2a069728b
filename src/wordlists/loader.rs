//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Every entry is trimmed and uppercased; entries that are not plain letters
//! are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a newline-delimited file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entry with non-letter characters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse words from text lines, skipping blanks and invalid entries
pub fn words_from_lines<'a, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(line = index + 1, entry = trimmed, "skipping word: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
