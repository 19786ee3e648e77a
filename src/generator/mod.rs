//! Puzzle generation
//!
//! Filters a corpus down to the answers for a letter set and creates puzzles
//! that pass the fairness bounds, from user letters or random ones.

pub mod creator;
pub mod filter;

#[cfg(test)]
pub(crate) mod fixtures;

pub use creator::{
    AcceptanceError, CreationError, CreatorConfig, DEFAULT_MAX_ATTEMPTS, PuzzleCreator,
    SCORE_RANGE, WORD_COUNT_RANGE, check_acceptable,
};
pub use filter::{FilterError, FilteredWords, WordFilter};
