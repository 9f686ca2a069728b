//! Command implementations

pub mod benchmark;
pub mod play;
pub mod suggest;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{GameConfig, GameResult, TurnRecord, play, play_game};
pub use suggest::{SuggestResult, suggest_words};
