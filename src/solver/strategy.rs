//! Letter selection strategies
//!
//! Defines the Strategy trait, the closed set of built-in strategies and the
//! name-level selection used by drivers.

use super::pattern::PatternStrategy;
use crate::core::{FREQUENCY_ORDER, LetterSet, PartialSolution, Word};
use crate::error::SolverError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Choose a letter that is not in `guessed`
    ///
    /// # Errors
    /// Returns `Exhausted` when nothing is left to propose, or `NoCandidates`
    /// when a dictionary-backed strategy finds the constraints unsatisfiable.
    fn select_letter(
        &mut self,
        solution: &PartialSolution,
        guessed: LetterSet,
    ) -> Result<u8, SolverError>;
}

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Fixed English letter-frequency order
    Frequency,
    /// Uniformly random un-guessed letter
    Random,
    /// Dictionary pruning by per-cell pattern (default)
    #[default]
    Regex,
}

impl StrategyKind {
    pub const ALL: [Self; 3] = [Self::Frequency, Self::Random, Self::Regex];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Random => "random",
            Self::Regex => "regex",
        }
    }

    /// Whether the strategy needs a dictionary
    #[must_use]
    pub const fn uses_dictionary(self) -> bool {
        matches!(self, Self::Regex)
    }

    /// Instantiate the strategy for an answer with the given slot lengths
    #[must_use]
    pub fn build(self, dictionary: &[Word], slot_lengths: &[usize]) -> StrategyType {
        match self {
            Self::Frequency => StrategyType::Frequency(FrequencyStrategy::new()),
            Self::Random => StrategyType::Random(RandomStrategy::new()),
            Self::Regex => StrategyType::Pattern(PatternStrategy::phrase(dictionary, slot_lengths)),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = SolverError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "frequency" | "freq" => Ok(Self::Frequency),
            "random" => Ok(Self::Random),
            "regex" | "pattern" => Ok(Self::Regex),
            _ => Err(SolverError::InvalidStrategy(name.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    Random(RandomStrategy),
    Frequency(FrequencyStrategy),
    Pattern(PatternStrategy),
}

impl StrategyType {
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Random(_) => StrategyKind::Random,
            Self::Frequency(_) => StrategyKind::Frequency,
            Self::Pattern(_) => StrategyKind::Regex,
        }
    }

    /// Remaining candidates per slot, for dictionary-backed strategies
    #[must_use]
    pub fn candidate_counts(&self) -> Option<Vec<usize>> {
        match self {
            Self::Pattern(s) => Some(s.candidate_counts()),
            Self::Random(_) | Self::Frequency(_) => None,
        }
    }
}

impl Strategy for StrategyType {
    fn select_letter(
        &mut self,
        solution: &PartialSolution,
        guessed: LetterSet,
    ) -> Result<u8, SolverError> {
        match self {
            Self::Random(s) => s.select_letter(solution, guessed),
            Self::Frequency(s) => s.select_letter(solution, guessed),
            Self::Pattern(s) => s.select_letter(solution, guessed),
        }
    }
}

/// Random strategy
///
/// Picks uniformly among the letters not yet guessed.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Random strategy seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible random strategy
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_letter(
        &mut self,
        _solution: &PartialSolution,
        guessed: LetterSet,
    ) -> Result<u8, SolverError> {
        let choices: Vec<u8> = guessed.complement().iter().collect();
        choices
            .choose(&mut self.rng)
            .copied()
            .ok_or(SolverError::Exhausted)
    }
}

/// Frequency strategy
///
/// Walks the English frequency order once; each letter is handed out at most
/// once per instance.
#[derive(Debug, Clone)]
pub struct FrequencyStrategy {
    order: VecDeque<u8>,
}

impl FrequencyStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: FREQUENCY_ORDER.into_iter().collect(),
        }
    }

    /// Letters not yet handed out
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len()
    }
}

impl Default for FrequencyStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for FrequencyStrategy {
    fn select_letter(
        &mut self,
        _solution: &PartialSolution,
        _guessed: LetterSet,
    ) -> Result<u8, SolverError> {
        self.order.pop_front().ok_or(SolverError::Exhausted)
    }
}
