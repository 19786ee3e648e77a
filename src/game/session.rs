//! Game session
//!
//! A `Session` owns one puzzle and the player's progress on it. Submissions
//! go through a fixed chain of checks; the first failing check is reported
//! and nothing is recorded.

use crate::core::{MIN_WORD_LENGTH, Puzzle};
use rustc_hash::FxHashSet;
use std::fmt;

/// A successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub word: String,
    pub points: u32,
    pub score_after: u32,
    pub pangram: bool,
}

impl SubmissionResult {
    #[inline]
    #[must_use]
    pub const fn is_pangram(&self) -> bool {
        self.pangram
    }
}

/// Why a submitted word was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    WordTooShort,
    MissingCenterLetter,
    IllegalLetter,
    NotInDictionary,
    AlreadyFound,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::WordTooShort => "Word is shorter than 4 characters",
            Self::MissingCenterLetter => "Word does not contain the center letter",
            Self::IllegalLetter => "Word contains a letter outside the puzzle",
            Self::NotInDictionary => "Word not found in the dictionary",
            Self::AlreadyFound => "Word already found",
        };
        f.write_str(message)
    }
}

impl std::error::Error for SubmissionError {}

/// One player's attempt at a puzzle
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    found: Vec<String>,
    found_set: FxHashSet<String>,
    score: u32,
    maximum_score: u32,
}

impl Session {
    /// Start a session on `puzzle`
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let maximum_score = puzzle.maximum_score();
        Self {
            puzzle,
            found: Vec::new(),
            found_set: FxHashSet::default(),
            score: 0,
            maximum_score,
        }
    }

    /// Submit a word
    ///
    /// Checks, in order: length, center letter, letters in the set,
    /// dictionary membership, not found before. On success the word is
    /// recorded and its points are added to the score.
    ///
    /// # Errors
    ///
    /// Returns the `SubmissionError` of the first failing check; the session
    /// is left untouched.
    pub fn check(&mut self, word: &str) -> Result<SubmissionResult, SubmissionError> {
        self.validate(word)?;

        let points = self.puzzle.score(word);
        self.score += points;
        self.found.push(word.to_string());
        self.found_set.insert(word.to_string());

        Ok(SubmissionResult {
            word: word.to_string(),
            points,
            score_after: self.score,
            pangram: self.puzzle.is_pangram(word),
        })
    }

    fn validate(&self, word: &str) -> Result<(), SubmissionError> {
        if word.chars().count() < MIN_WORD_LENGTH {
            return Err(SubmissionError::WordTooShort);
        }
        if !word.contains(self.puzzle.center()) {
            return Err(SubmissionError::MissingCenterLetter);
        }
        if !self.puzzle.letters().spells(word) {
            return Err(SubmissionError::IllegalLetter);
        }
        if !self.puzzle.contains(word) {
            return Err(SubmissionError::NotInDictionary);
        }
        if self.found_set.contains(word) {
            return Err(SubmissionError::AlreadyFound);
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub const fn current_score(&self) -> u32 {
        self.score
    }

    /// Maximum reachable score, fixed when the session started
    #[inline]
    #[must_use]
    pub const fn maximum_score(&self) -> u32 {
        self.maximum_score
    }

    /// Found words in the order the player found them
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub fn has_found(&self, word: &str) -> bool {
        self.found_set.contains(word)
    }

    /// Answers not found yet, in puzzle order
    #[must_use]
    pub fn remaining_words(&self) -> Vec<&str> {
        self.puzzle
            .words()
            .iter()
            .filter(|w| !self.found_set.contains(w.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Whether every answer has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.puzzle.words().len()
    }

    /// Share of the maximum score reached, between 0 and 1
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.maximum_score == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.maximum_score)
    }
}
