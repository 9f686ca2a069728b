//! Per-slot candidate word sets
//!
//! A candidate set starts as every dictionary word of the slot's length and
//! only ever shrinks as patterns prune it.

use crate::core::{LetterSet, SlotPattern, Word};
use rustc_hash::FxHashSet;

/// Dictionary words still consistent with one slot
#[derive(Debug, Clone)]
pub struct CandidateSet {
    word_length: usize,
    words: Vec<Word>,
}

impl CandidateSet {
    /// Seed a set with the distinct dictionary words of exactly `word_length` letters
    ///
    /// Words are kept sorted so diagnostics list them in a stable order.
    pub fn new<'a, I>(word_length: usize, dictionary: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let unique: FxHashSet<&Word> = dictionary
            .into_iter()
            .filter(|word| word.len() == word_length)
            .collect();

        let mut words: Vec<Word> = unique.into_iter().cloned().collect();
        words.sort_unstable();

        Self { word_length, words }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }

    /// Drop every word the pattern rejects, returning how many were removed
    pub fn prune(&mut self, pattern: &SlotPattern) -> usize {
        let before = self.words.len();
        self.words.retain(|word| pattern.matches(word.letters()));
        before - self.words.len()
    }

    /// Distinct letters appearing anywhere in the remaining words
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.words
            .iter()
            .fold(LetterSet::EMPTY, |acc, word| acc.union(word.letter_set()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&["test", "best", "rest", "nest", "tests", "cat", "TEST"])
    }

    #[test]
    fn new_keeps_only_matching_length() {
        let dict = dictionary();
        let set = CandidateSet::new(4, &dict);

        assert_eq!(set.word_length(), 4);
        assert_eq!(set.len(), 4);
        assert!(set.contains("TEST"));
        assert!(!set.contains("TESTS"));
    }

    #[test]
    fn new_deduplicates_and_sorts() {
        let dict = dictionary();
        let set = CandidateSet::new(4, &dict);
        let texts: Vec<&str> = set.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["BEST", "NEST", "REST", "TEST"]);
    }

    #[test]
    fn new_with_no_words_of_length() {
        let dict = dictionary();
        assert!(CandidateSet::new(9, &dict).is_empty());
    }

    #[test]
    fn prune_removes_rejected_words() {
        let dict = dictionary();
        let mut set = CandidateSet::new(4, &dict);

        let guessed: LetterSet = b"ET".iter().copied().collect();
        let pattern = SlotPattern::new(&[Some(b'T'), Some(b'E'), None, Some(b'T')], guessed);

        assert_eq!(set.prune(&pattern), 3);
        assert_eq!(set.len(), 1);
        assert!(set.contains("TEST"));
    }

    #[test]
    fn letters_unions_all_words() {
        let dict = dictionary();
        let set = CandidateSet::new(4, &dict);
        assert_eq!(set.letters().to_string(), "BENRST");
    }
}
