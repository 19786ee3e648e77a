//! Word list loading utilities
//!
//! Reads raw word lists and normalizes them into corpus words: lowercase,
//! common accents folded to their base letter, at least four characters long.

use crate::core::MIN_WORD_LENGTH;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Accented characters folded to a plain letter during normalization
const ACCENT_FOLDS: &[(char, char)] = &[
    ('á', 'a'),
    ('à', 'a'),
    ('é', 'e'),
    ('è', 'e'),
    ('í', 'i'),
    ('ì', 'i'),
    ('ï', 'i'),
    ('ó', 'o'),
    ('ò', 'o'),
    ('ú', 'u'),
    ('ù', 'u'),
    ('ü', 'u'),
    ('ñ', 'n'),
];

/// Normalize a raw corpus entry
///
/// Returns `None` for entries that are shorter than four characters once
/// normalized.
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::normalize_word;
///
/// assert_eq!(normalize_word(" Piñata "), Some("pinata".to_string()));
/// assert_eq!(normalize_word("Café"), Some("cafe".to_string()));
/// assert_eq!(normalize_word("tea"), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let word: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .map(fold_accent)
        .collect();

    (word.chars().count() >= MIN_WORD_LENGTH).then_some(word)
}

fn fold_accent(ch: char) -> char {
    ACCENT_FOLDS
        .iter()
        .find(|&&(accented, _)| accented == ch)
        .map_or(ch, |&(_, plain)| plain)
}

/// Load and normalize words from a file, one entry per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Normalize an embedded string slice into corpus words
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Granite", "ant", "Élan"]);
/// assert_eq!(words, vec!["granite".to_string(), "elan".to_string()]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a, I>(lines: I) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let mut skipped = 0usize;
    let words: Vec<String> = lines
        .filter_map(|line| {
            let word = normalize_word(line);
            if word.is_none() && !line.trim().is_empty() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        debug!("Skipped {skipped} corpus entries shorter than {MIN_WORD_LENGTH} characters");
    }
    words
}
