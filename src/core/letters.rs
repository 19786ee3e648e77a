//! Puzzle letter set
//!
//! A `LetterSet` holds the seven distinct letters of a puzzle. The letter at
//! index 3 is the center letter that every answer must contain.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Number of letters in every puzzle
pub const LETTER_COUNT: usize = 7;

/// Index of the center letter inside the letter sequence
pub const CENTER_INDEX: usize = LETTER_COUNT / 2;

/// Letters a puzzle may be built from
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Seven distinct lowercase letters with a designated center
///
/// Stores the letters as bytes in construction order along with a bitmask
/// (bit `n` set for the `n`th letter of the alphabet) for fast membership tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterSet {
    letters: [u8; LETTER_COUNT],
    mask: u32,
}

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterSetError {
    InvalidLetterCount(usize),
    UnsupportedLetter(char),
    DuplicateLetter(char),
}

impl fmt::Display for LetterSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetterCount(count) => {
                write!(f, "Letters must be exactly 7 characters, got {count}")
            }
            Self::UnsupportedLetter(ch) => {
                write!(f, "Letters must be English characters, '{ch}' is not supported")
            }
            Self::DuplicateLetter(ch) => write!(f, "Letters are not unique, '{ch}' repeats"),
        }
    }
}

impl std::error::Error for LetterSetError {}

impl LetterSet {
    /// Parse a letter set from user input
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// length, then alphabet, then uniqueness.
    ///
    /// # Errors
    /// Returns `LetterSetError` if:
    /// - The input is not exactly 7 characters
    /// - A character is outside `a`-`z`
    /// - A character appears more than once
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::{LetterSet, LetterSetError};
    ///
    /// let letters = LetterSet::parse("gfedcba").unwrap();
    /// assert_eq!(letters.center(), 'd');
    ///
    /// assert_eq!(LetterSet::parse("abc"), Err(LetterSetError::InvalidLetterCount(3)));
    /// assert_eq!(LetterSet::parse("abcdeff"), Err(LetterSetError::DuplicateLetter('f')));
    /// ```
    pub fn parse(input: &str) -> Result<Self, LetterSetError> {
        let count = input.chars().count();
        if count != LETTER_COUNT {
            return Err(LetterSetError::InvalidLetterCount(count));
        }

        if let Some(ch) = input.chars().find(|&c| !ALPHABET.contains(c)) {
            return Err(LetterSetError::UnsupportedLetter(ch));
        }

        let mut letters = [0u8; LETTER_COUNT];
        let mut mask = 0u32;
        for (slot, byte) in letters.iter_mut().zip(input.bytes()) {
            let bit = letter_bit(byte);
            if mask & bit != 0 {
                return Err(LetterSetError::DuplicateLetter(char::from(byte)));
            }
            mask |= bit;
            *slot = byte;
        }

        Ok(Self { letters, mask })
    }

    /// Build a letter set from letters already known to be distinct and lowercase
    pub(crate) fn from_distinct(letters: [u8; LETTER_COUNT]) -> Self {
        let mask = letters.iter().fold(0, |acc, &b| acc | letter_bit(b));
        debug_assert_eq!(mask.count_ones() as usize, LETTER_COUNT);
        Self { letters, mask }
    }

    /// The letter every answer must contain
    #[inline]
    #[must_use]
    pub fn center(&self) -> char {
        char::from(self.letters[CENTER_INDEX])
    }

    /// All seven letters in construction order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; LETTER_COUNT] {
        &self.letters
    }

    /// The six letters surrounding the center, in construction order
    #[must_use]
    pub fn outer(&self) -> Vec<char> {
        self.letters
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != CENTER_INDEX)
            .map(|(_, &b)| char::from(b))
            .collect()
    }

    /// Bitmask of the letters in the set
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Check if a character belongs to the set
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        u8::try_from(ch)
            .ok()
            .filter(u8::is_ascii_lowercase)
            .is_some_and(|b| self.mask & letter_bit(b) != 0)
    }

    /// Check that a word only uses letters from the set
    #[must_use]
    pub fn spells(&self, word: &str) -> bool {
        word.chars().all(|ch| self.contains(ch))
    }

    /// Check that a word uses every letter of the set at least once
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        word_mask(word).is_some_and(|mask| mask & self.mask == self.mask)
    }

    /// Letters in hive order: center fixed at index 3, outer six shuffled
    ///
    /// Only affects presentation; the puzzle's center letter never moves.
    pub fn hive<R: Rng + ?Sized>(&self, rng: &mut R) -> [char; LETTER_COUNT] {
        let mut outer = self.outer();
        outer.shuffle(rng);

        let mut hive = [self.center(); LETTER_COUNT];
        let mut rest = outer.into_iter();
        for (i, slot) in hive.iter_mut().enumerate() {
            if i != CENTER_INDEX
                && let Some(ch) = rest.next()
            {
                *slot = ch;
            }
        }
        hive
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

/// Tidy user-typed letters before `LetterSet::parse`
///
/// Trims whitespace and lower-cases ASCII only, so any other character
/// reaches `parse` unchanged and is reported as unsupported.
///
/// # Examples
/// ```
/// use spelling_bee::core::{LetterSet, LetterSetError, normalize_letters};
///
/// assert_eq!(normalize_letters(" GFEDCBA\n"), "gfedcba");
/// assert_eq!(
///     LetterSet::parse(&normalize_letters("abcdefİ")),
///     Err(LetterSetError::UnsupportedLetter('İ'))
/// );
/// ```
#[must_use]
pub fn normalize_letters(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

#[inline]
const fn letter_bit(byte: u8) -> u32 {
    1 << (byte - b'a')
}

/// Bitmask of the letters in a word, or `None` if it has characters outside `a`-`z`
#[must_use]
pub fn word_mask(word: &str) -> Option<u32> {
    word.bytes().try_fold(0u32, |acc, b| {
        b.is_ascii_lowercase().then(|| acc | letter_bit(b))
    })
}
