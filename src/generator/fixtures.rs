//! Corpora shared by tests

use super::PuzzleCreator;
use crate::core::Puzzle;

/// Letters of the fixture puzzle; `d` is the center
pub const LETTERS: &str = "gfedcba";

/// The fixture's only pangram
pub const PANGRAM: &str = "abcdefg";

/// `count` distinct six-letter words over `a`-`g`, all starting with `d`
///
/// Six letters can never cover all seven, so none of them is a pangram.
pub fn filler_words(count: usize) -> Vec<String> {
    const SYMBOLS: &[u8] = b"abcdefg";

    (0..count)
        .map(|mut i| {
            let mut word = String::from("d");
            for _ in 0..5 {
                word.push(char::from(SYMBOLS[i % SYMBOLS.len()]));
                i /= SYMBOLS.len();
            }
            word
        })
        .collect()
}

/// Corpus whose `gfedcba` puzzle has 31 words worth 101 points
pub fn corpus() -> Vec<String> {
    let mut words = vec![PANGRAM.to_string()];
    words.extend(filler_words(30));
    // Noise the filter must drop
    words.extend(["dove", "bake", "abcdefg", "zebra"].map(String::from));
    words
}

pub fn puzzle() -> Puzzle {
    let corpus = corpus();
    PuzzleCreator::new(&corpus)
        .create_from_letters(LETTERS)
        .expect("fixture corpus yields a valid puzzle")
}
