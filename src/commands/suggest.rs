//! Prefix completion command

use crate::core::Word;
use crate::index::Trie;

/// Result of a completion lookup
#[derive(Debug, Clone)]
pub struct SuggestResult {
    pub prefix: String,
    /// Completions in alphabetical order
    pub words: Vec<String>,
    /// Total completions before `limit` was applied
    pub total: usize,
}

/// Complete `prefix` against the dictionary
///
/// The trie itself returns completions in no particular order; they are
/// sorted here for display.
#[must_use]
pub fn suggest_words(dictionary: &[Word], prefix: &str, limit: Option<usize>) -> SuggestResult {
    let trie: Trie = dictionary.iter().map(Word::text).collect();

    let mut words = trie.suggest(prefix);
    words.sort_unstable();
    let total = words.len();
    if let Some(limit) = limit {
        words.truncate(limit);
    }

    SuggestResult {
        prefix: prefix.to_uppercase(),
        words,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn suggest_words_sorted() {
        let dictionary = words_from_slice(&["card", "cat", "car", "dog"]);
        let result = suggest_words(&dictionary, "ca", None);

        assert_eq!(result.prefix, "CA");
        assert_eq!(result.words, vec!["CAR", "CARD", "CAT"]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn suggest_words_limit_keeps_total() {
        let dictionary = words_from_slice(&["card", "cat", "car", "dog"]);
        let result = suggest_words(&dictionary, "c", Some(1));

        assert_eq!(result.words, vec!["CAR"]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn suggest_words_unknown_prefix() {
        let dictionary = words_from_slice(&["card"]);
        let result = suggest_words(&dictionary, "x", None);
        assert!(result.words.is_empty());
        assert_eq!(result.total, 0);
    }
}
