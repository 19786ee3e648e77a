//! Create command
//!
//! Builds a single puzzle, from user letters or random ones, and reports how
//! long it took.

use crate::core::{Puzzle, normalize_letters};
use crate::generator::{CreationError, PuzzleCreator};
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of creating a puzzle
pub struct CreateResult {
    pub puzzle: Puzzle,
    /// Random draws consumed; always 1 for user letters
    pub attempts: usize,
    pub duration: Duration,
    pub from_letters: bool,
}

/// Create a puzzle from `letters` if given, otherwise from random letters
///
/// User letters go through `normalize_letters` before validation.
///
/// # Errors
///
/// Returns the `CreationError` from the creator unchanged.
pub fn create_puzzle<R: Rng + ?Sized>(
    creator: &PuzzleCreator,
    letters: Option<&str>,
    rng: &mut R,
) -> Result<CreateResult, CreationError> {
    let start = Instant::now();

    let (puzzle, attempts) = match letters {
        Some(letters) => (creator.create_from_letters(&normalize_letters(letters))?, 1),
        None => creator.create_random_with_attempts(rng)?,
    };

    Ok(CreateResult {
        puzzle,
        attempts,
        duration: start.elapsed(),
        from_letters: letters.is_some(),
    })
}
