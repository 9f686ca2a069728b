//! Word lists for Hangman solving
//!
//! Provides a built-in dictionary compiled into the binary, plus loading of
//! newline-delimited word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
