//! Core domain types for Spelling Bee
//!
//! This module contains the fundamental domain types: the letter set, the
//! scoring rule and the finished puzzle. Everything here is pure and testable.

mod letters;
mod puzzle;
mod score;

pub use letters::{
    ALPHABET, CENTER_INDEX, LETTER_COUNT, LetterSet, LetterSetError, normalize_letters,
    word_mask,
};
pub use puzzle::Puzzle;
pub use score::{MIN_WORD_LENGTH, PANGRAM_BONUS, score, total_score, word_points};
