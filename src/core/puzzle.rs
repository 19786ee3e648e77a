//! Finished puzzle
//!
//! A `Puzzle` is only ever produced by the generator after it passed every
//! acceptability check, so its contents are immutable.

use super::letters::LetterSet;
use super::score::{total_score, word_points};
use rustc_hash::FxHashSet;

/// A playable puzzle: letter set, answers and pangrams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    letters: LetterSet,
    words: Vec<String>,
    pangrams: Vec<String>,
    dictionary: FxHashSet<String>,
    pangram_set: FxHashSet<String>,
    maximum_score: u32,
}

impl Puzzle {
    /// Assemble a puzzle from filtered words
    ///
    /// The caller is responsible for the acceptability checks.
    pub(crate) fn new(letters: LetterSet, words: Vec<String>, pangrams: Vec<String>) -> Self {
        let maximum_score = total_score(&words, &pangrams);
        let dictionary = words.iter().cloned().collect();
        let pangram_set = pangrams.iter().cloned().collect();

        Self {
            letters,
            words,
            pangrams,
            dictionary,
            pangram_set,
            maximum_score,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> char {
        self.letters.center()
    }

    /// Every accepted answer, in corpus order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Answers that use all seven letters
    #[inline]
    #[must_use]
    pub fn pangrams(&self) -> &[String] {
        &self.pangrams
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        self.pangram_set.contains(word)
    }

    /// Points `word` is worth in this puzzle
    #[must_use]
    pub fn score(&self, word: &str) -> u32 {
        word_points(word.chars().count(), self.is_pangram(word))
    }

    /// Sum of every answer's points
    #[inline]
    #[must_use]
    pub const fn maximum_score(&self) -> u32 {
        self.maximum_score
    }
}
