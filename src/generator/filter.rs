//! Puzzle word filtering
//!
//! Turns a raw corpus plus a letter set into the list of eligible answers and
//! the pangrams among them, or picks a random letter set from the corpus.

use crate::core::{LETTER_COUNT, LetterSet, MIN_WORD_LENGTH, total_score, word_mask};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashSet;
use std::fmt;

/// Eligible answers for a letter set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredWords {
    /// Distinct corpus words spelled from the set and containing the center
    pub words: Vec<String>,
    /// Words that use all seven letters
    pub pangrams: Vec<String>,
}

impl FilteredWords {
    /// Sum of every eligible word's points
    #[must_use]
    pub fn total_score(&self) -> u32 {
        total_score(&self.words, &self.pangrams)
    }
}

/// Error type for random filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// No corpus word has exactly seven distinct letters
    NoPangramCandidates,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPangramCandidates => {
                write!(f, "Corpus has no word with exactly 7 distinct letters")
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Word filter over a fixed corpus
///
/// The corpus-level pangram candidates (words with exactly seven distinct
/// letters) are found once up front and reused for every random draw.
pub struct WordFilter<'a> {
    corpus: &'a [String],
    candidates: Vec<[u8; LETTER_COUNT]>,
}

impl<'a> WordFilter<'a> {
    /// Create a filter over `corpus`
    #[must_use]
    pub fn new(corpus: &'a [String]) -> Self {
        let candidates = corpus.iter().filter_map(|w| distinct_letters(w)).collect();
        Self { corpus, candidates }
    }

    /// Number of corpus words that can seed a random letter set
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Filter the corpus down to the answers for `letters`
    ///
    /// Keeps words of at least four characters, spelled only from the set and
    /// containing the center letter, drops repeated words (first occurrence
    /// wins) and collects the pangrams. Either list may come back empty.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    /// use spelling_bee::generator::WordFilter;
    ///
    /// let corpus: Vec<String> = ["abcdefg", "abc", "bdeg", "facegb", "bdeg"]
    ///     .iter()
    ///     .map(|s| s.to_string())
    ///     .collect();
    /// let filter = WordFilter::new(&corpus);
    ///
    /// let letters = LetterSet::parse("gfedcba").unwrap();
    /// let filtered = filter.filter_with_letters(&letters);
    /// assert_eq!(filtered.words, vec!["abcdefg", "bdeg"]);
    /// assert_eq!(filtered.pangrams, vec!["abcdefg"]);
    /// ```
    #[must_use]
    pub fn filter_with_letters(&self, letters: &LetterSet) -> FilteredWords {
        let center = letters.center();
        let allowed = letters.mask();
        let mut seen: FxHashSet<&str> = FxHashSet::default();

        let words: Vec<String> = self
            .corpus
            .iter()
            .map(String::as_str)
            .filter(|word| word.len() >= MIN_WORD_LENGTH)
            .filter(|word| word_mask(word).is_some_and(|mask| mask & !allowed == 0))
            .filter(|word| word.contains(center))
            .filter(|&word| seen.insert(word))
            .map(str::to_string)
            .collect();

        let pangrams = words
            .iter()
            .filter(|word| letters.is_pangram(word))
            .cloned()
            .collect();

        FilteredWords { words, pangrams }
    }

    /// Pick a random letter set from the corpus and filter for it
    ///
    /// A seed word is drawn uniformly from the pangram candidates; its distinct
    /// letters are shuffled, and whichever lands at index 3 becomes the center.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::NoPangramCandidates` if no corpus word has
    /// exactly seven distinct letters.
    pub fn filter_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(FilteredWords, LetterSet), FilterError> {
        let mut letters = *self
            .candidates
            .choose(rng)
            .ok_or(FilterError::NoPangramCandidates)?;
        letters.shuffle(rng);

        let letters = LetterSet::from_distinct(letters);
        Ok((self.filter_with_letters(&letters), letters))
    }
}

/// Distinct letters of `word` in first-occurrence order
///
/// Returns `None` unless the word is made of `a`-`z` only and has exactly
/// seven distinct letters.
fn distinct_letters(word: &str) -> Option<[u8; LETTER_COUNT]> {
    let mask = word_mask(word)?;
    if mask.count_ones() as usize != LETTER_COUNT {
        return None;
    }

    let mut letters = [0u8; LETTER_COUNT];
    let mut filled = 0;
    for byte in word.bytes() {
        if !letters[..filled].contains(&byte) {
            letters[filled] = byte;
            filled += 1;
        }
    }
    Some(letters)
}
