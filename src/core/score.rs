//! Word scoring
//!
//! Every answer is worth its length minus three; pangrams earn a seven point
//! bonus on top of that.

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 4;

/// Bonus for using every letter of the puzzle
pub const PANGRAM_BONUS: u32 = 7;

/// Points awarded for a word of `length` characters
///
/// # Examples
/// ```
/// use spelling_bee::core::word_points;
///
/// assert_eq!(word_points(4, false), 1);
/// assert_eq!(word_points(7, true), 11);
/// ```
#[inline]
#[must_use]
pub fn word_points(length: usize, pangram: bool) -> u32 {
    let base = length.saturating_sub(MIN_WORD_LENGTH - 1) as u32;
    if pangram { base + PANGRAM_BONUS } else { base }
}

/// Points awarded for `word` given the puzzle's pangram list
#[must_use]
pub fn score<S: AsRef<str>>(word: &str, pangrams: &[S]) -> u32 {
    let pangram = pangrams.iter().any(|p| p.as_ref() == word);
    word_points(word.chars().count(), pangram)
}

/// Sum of `score` over every word
#[must_use]
pub fn total_score<S: AsRef<str>>(words: &[S], pangrams: &[S]) -> u32 {
    words.iter().map(|w| score(w.as_ref(), pangrams)).sum()
}
