//! Formatting utilities for terminal output

use crate::core::{CENTER_INDEX, LETTER_COUNT};

/// Lay out hive letters as three text rows, center bracketed
///
/// Hive order is the one produced by `LetterSet::hive`: the center sits at
/// index 3 with three outer letters on either side.
#[must_use]
pub fn hive_rows(hive: &[char; LETTER_COUNT]) -> [String; 3] {
    let up: Vec<char> = hive.iter().map(char::to_ascii_uppercase).collect();
    let center = up[CENTER_INDEX];

    [
        format!("   {}   {}", up[0], up[1]),
        format!(" {} [{}] {}", up[2], center, up[4]),
        format!("   {}   {}", up[5], up[6]),
    ]
}

/// Letters of a puzzle on one line, center bracketed
#[must_use]
pub fn letters_inline(letters: &[u8; LETTER_COUNT]) -> String {
    letters
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let ch = char::from(b).to_ascii_uppercase();
            if i == CENTER_INDEX {
                format!("[{ch}]")
            } else {
                ch.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score progress as a bar
#[must_use]
pub fn score_bar(score: u32, maximum: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(maximum), width)
}

/// Pluralize a count: `1 word`, `2 words`
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
