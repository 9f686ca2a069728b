//! Dictionary-pruning strategy
//!
//! Keeps one candidate set per slot. Each turn every slot is pruned against its
//! own [`SlotPattern`], the letters of all surviving candidates are pooled, and
//! the most common un-guessed letter of that pool is proposed.
//!
//! A single word is simply the one-slot case of a phrase.

use super::candidates::CandidateSet;
use super::ranking;
use super::strategy::Strategy;
use crate::core::{LetterSet, PartialSolution, SlotPattern, Word};
use crate::error::SolverError;
use tracing::debug;

/// Candidate listings are only logged when this small
const MAX_LISTED_CANDIDATES: usize = 20;

/// Pattern-constrained dictionary strategy
#[derive(Debug, Clone)]
pub struct PatternStrategy {
    slots: Vec<CandidateSet>,
}

impl PatternStrategy {
    /// Strategy for a single word of `length` letters
    #[must_use]
    pub fn single(dictionary: &[Word], length: usize) -> Self {
        Self::phrase(dictionary, &[length])
    }

    /// Strategy for a phrase with one slot per entry of `lengths`
    #[must_use]
    pub fn phrase(dictionary: &[Word], lengths: &[usize]) -> Self {
        Self {
            slots: lengths
                .iter()
                .map(|&len| CandidateSet::new(len, dictionary))
                .collect(),
        }
    }

    /// Remaining candidate count for each slot
    #[must_use]
    pub fn candidate_counts(&self) -> Vec<usize> {
        self.slots.iter().map(CandidateSet::len).collect()
    }

    /// Candidate set for one slot
    #[must_use]
    pub fn candidates(&self, slot: usize) -> Option<&CandidateSet> {
        self.slots.get(slot)
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Prune every slot against the current solution
    ///
    /// # Errors
    /// - `SlotCountMismatch` if the solution has a different number of slots;
    ///   nothing is pruned in that case
    /// - `NoCandidates` naming the first slot left empty
    pub fn prune(
        &mut self,
        solution: &PartialSolution,
        guessed: LetterSet,
    ) -> Result<(), SolverError> {
        if solution.slot_count() != self.slots.len() {
            return Err(SolverError::SlotCountMismatch {
                strategy: self.slots.len(),
                solution: solution.slot_count(),
            });
        }

        let slots = self.slots.iter_mut().enumerate().zip(solution.slots());
        for ((slot, candidates), cells) in slots {
            let pattern = SlotPattern::new(cells, guessed);
            let removed = candidates.prune(&pattern);

            debug!(slot, %pattern, removed, remaining = candidates.len(), "pruned slot");

            if candidates.is_empty() {
                return Err(SolverError::NoCandidates { slot });
            }
            log_candidates(slot, candidates);
        }
        Ok(())
    }

    /// Letters appearing in any slot's remaining candidates
    #[must_use]
    pub fn candidate_letters(&self) -> LetterSet {
        self.slots
            .iter()
            .fold(LetterSet::EMPTY, |acc, set| acc.union(set.letters()))
    }
}

impl Strategy for PatternStrategy {
    fn select_letter(
        &mut self,
        solution: &PartialSolution,
        guessed: LetterSet,
    ) -> Result<u8, SolverError> {
        self.prune(solution, guessed)?;

        let open = self.candidate_letters().difference(guessed);
        ranking::most_common(open).ok_or(SolverError::Exhausted)
    }
}

fn log_candidates(slot: usize, candidates: &CandidateSet) {
    if candidates.len() <= 1 {
        return;
    }
    if candidates.len() <= MAX_LISTED_CANDIDATES {
        let listing = candidates
            .words()
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join(", ");
        debug!(slot, "Evaluating {} candidates ({listing})", candidates.len());
    } else {
        debug!(slot, "Evaluating {} candidates", candidates.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn four_letter_dictionary() -> Vec<Word> {
        words_from_slice(&["TEST", "BEST", "REST", "NEST"])
    }

    fn guessed(letters: &[u8]) -> LetterSet {
        letters.iter().copied().collect()
    }

    #[test]
    fn single_restricts_to_slot_length() {
        let dict = words_from_slice(&["TEST", "BEST", "CAT", "TESTS"]);
        let strategy = PatternStrategy::single(&dict, 4);
        assert_eq!(strategy.candidate_counts(), vec![2]);
        assert_eq!(strategy.slot_count(), 1);
    }

    #[test]
    fn first_guess_is_most_common_letter_in_candidates() {
        let dict = four_letter_dictionary();
        let mut strategy = PatternStrategy::single(&dict, 4);
        let solution = PartialSolution::new(&[4]);

        let letter = strategy.select_letter(&solution, LetterSet::EMPTY).unwrap();

        assert_eq!(letter, b'E');
        assert_eq!(strategy.candidate_counts(), vec![4]);
    }

    #[test]
    fn revealed_letter_keeps_all_matching_words() {
        let dict = four_letter_dictionary();
        let mut strategy = PatternStrategy::single(&dict, 4);
        let mut solution = PartialSolution::new(&[4]);
        solution.reveal(b'E', &[vec![1]]).unwrap();

        let letter = strategy.select_letter(&solution, guessed(b"E")).unwrap();

        assert_eq!(strategy.candidate_counts(), vec![4]);
        assert_eq!(letter, b'T');
    }

    #[test]
    fn guessed_letter_prunes_it_from_unknown_cells() {
        let dict = four_letter_dictionary();
        let mut strategy = PatternStrategy::single(&dict, 4);
        let mut solution = PartialSolution::new(&[4]);
        solution.reveal(b'E', &[vec![1]]).unwrap();
        solution.reveal(b'S', &[vec![2]]).unwrap();
        solution.reveal(b'T', &[vec![3]]).unwrap();

        // T is only at the end, so TEST is out
        let letter = strategy.select_letter(&solution, guessed(b"EST")).unwrap();

        assert_eq!(strategy.candidate_counts(), vec![3]);
        assert!(!strategy.candidates(0).unwrap().contains("TEST"));
        // N ranks ahead of R and B
        assert_eq!(letter, b'N');
    }

    #[test]
    fn unsatisfiable_slot_reports_no_candidates() {
        let dict = four_letter_dictionary();
        let mut strategy = PatternStrategy::single(&dict, 4);
        let mut solution = PartialSolution::new(&[4]);
        solution.reveal(b'Z', &[vec![0]]).unwrap();

        let err = strategy.select_letter(&solution, guessed(b"Z")).unwrap_err();
        assert_eq!(err, SolverError::NoCandidates { slot: 0 });
    }

    #[test]
    fn fully_guessed_candidates_exhaust() {
        let dict = words_from_slice(&["AB"]);
        let mut strategy = PatternStrategy::single(&dict, 2);
        let mut solution = PartialSolution::new(&[2]);
        solution.reveal(b'A', &[vec![0]]).unwrap();
        solution.reveal(b'B', &[vec![1]]).unwrap();

        let err = strategy.select_letter(&solution, guessed(b"AB")).unwrap_err();
        assert_eq!(err, SolverError::Exhausted);
    }

    #[test]
    fn prune_rejects_mismatched_slot_count() {
        let dict = four_letter_dictionary();
        let mut strategy = PatternStrategy::phrase(&dict, &[4, 4]);

        let cases: [&[usize]; 2] = [&[4], &[4, 4, 4]];
        for lengths in cases {
            let solution = PartialSolution::new(lengths);
            assert_eq!(
                strategy.select_letter(&solution, LetterSet::EMPTY),
                Err(SolverError::SlotCountMismatch {
                    strategy: 2,
                    solution: lengths.len()
                })
            );
        }
        assert_eq!(strategy.candidate_counts(), vec![4, 4]);
    }

    #[test]
    fn phrase_names_the_empty_slot() {
        let dict = words_from_slice(&["CATS", "DOGS", "TREE"]);
        let mut strategy = PatternStrategy::phrase(&dict, &[4, 4]);
        let mut solution = PartialSolution::new(&[4, 4]);
        solution.reveal(b'Q', &[vec![], vec![0]]).unwrap();

        let err = strategy.select_letter(&solution, guessed(b"Q")).unwrap_err();
        assert_eq!(err, SolverError::NoCandidates { slot: 1 });
    }

    #[test]
    fn phrase_pools_letters_across_slots() {
        let dict = words_from_slice(&["ZZZ", "QQQQ"]);
        let mut strategy = PatternStrategy::phrase(&dict, &[3, 4]);
        let solution = PartialSolution::new(&[3, 4]);

        // Q outranks Z in the frequency order, and only slot 1 has it
        let letter = strategy.select_letter(&solution, LetterSet::EMPTY).unwrap();
        assert_eq!(letter, b'Q');
        assert_eq!(strategy.candidate_letters().to_string(), "QZ");
    }

    #[test]
    fn pruning_is_monotonic_and_sound() {
        let dict = words_from_slice(&["TEST", "BEST", "REST", "NEST", "TENT", "BENT"]);
        let mut strategy = PatternStrategy::single(&dict, 4);
        let mut solution = PartialSolution::new(&[4]);
        let mut guessed_letters = LetterSet::EMPTY;
        let answer = Word::new("REST").unwrap();
        let mut previous = strategy.candidate_counts()[0];

        while !solution.is_complete() {
            let pattern = SlotPattern::new(solution.slot(0).unwrap(), guessed_letters);
            let letter = strategy.select_letter(&solution, guessed_letters).unwrap();

            let current = strategy.candidate_counts()[0];
            assert!(current <= previous);
            previous = current;
            for word in strategy.candidates(0).unwrap().words() {
                assert!(pattern.matches(word.letters()), "{word} escaped {pattern}");
            }

            assert!(guessed_letters.insert(letter));
            solution
                .reveal(letter, &[answer.positions_of(letter)])
                .unwrap();
        }

        assert_eq!(solution.to_string(), "R E S T");
        assert_eq!(guessed_letters.to_string(), "ENRST");
    }

    #[test]
    fn phrase_pruning_is_monotonic_and_sound_per_slot() {
        let dict = words_from_slice(&[
            "TEST", "BEST", "REST", "NEST", "DOGS", "LOGS", "FOGS", "CATS", "TENT",
        ]);
        let answer = [Word::new("REST").unwrap(), Word::new("DOGS").unwrap()];
        let mut strategy = PatternStrategy::phrase(&dict, &[4, 4]);
        let mut solution = PartialSolution::new(&[4, 4]);
        let mut guessed_letters = LetterSet::EMPTY;
        let mut previous = strategy.candidate_counts();

        while !solution.is_complete() {
            let patterns: Vec<SlotPattern> = solution
                .slots()
                .map(|cells| SlotPattern::new(cells, guessed_letters))
                .collect();
            let letter = strategy.select_letter(&solution, guessed_letters).unwrap();

            let current = strategy.candidate_counts();
            for (slot, pattern) in patterns.iter().enumerate() {
                assert!(current[slot] <= previous[slot], "slot {slot} grew");
                for word in strategy.candidates(slot).unwrap().words() {
                    assert!(
                        pattern.matches(word.letters()),
                        "slot {slot}: {word} escaped {pattern}"
                    );
                }
                assert!(strategy.candidates(slot).unwrap().contains(answer[slot].text()));
            }
            previous = current;

            assert!(guessed_letters.insert(letter));
            let positions: Vec<Vec<usize>> =
                answer.iter().map(|w| w.positions_of(letter)).collect();
            solution.reveal(letter, &positions).unwrap();
        }

        assert_eq!(solution.to_string(), "R E S T   D O G S");
    }
}
