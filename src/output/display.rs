//! Display functions for command results

use super::formatters::{hive_rows, letters_inline, plural, score_bar};
use crate::commands::{BenchmarkResult, CreateResult};
use crate::core::LETTER_COUNT;
use crate::game::{Session, SubmissionError, SubmissionResult};
use colored::Colorize;

/// Print the result of creating a puzzle
///
/// With `reveal`, the pangrams and every answer are listed too.
pub fn print_create_result(result: &CreateResult, reveal: bool) {
    let puzzle = &result.puzzle;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE:".bright_cyan().bold(),
        letters_inline(puzzle.letters().letters())
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🐝 Center letter:  {}",
        puzzle.center().to_ascii_uppercase().to_string().bright_yellow()
    );
    println!("   Words:          {}", puzzle.words().len());
    println!("   Pangrams:       {}", puzzle.pangrams().len());
    println!(
        "   Maximum score:  {}",
        puzzle.maximum_score().to_string().bright_cyan().bold()
    );
    if result.from_letters {
        println!("   Source:         user letters");
    } else {
        println!(
            "   Source:         random ({})",
            plural(result.attempts, "attempt")
        );
    }
    println!("   Time taken:     {:.2}ms", result.duration.as_secs_f64() * 1000.0);

    if reveal {
        println!(
            "\n✨ {} ({})",
            "Pangrams".bright_cyan().bold(),
            puzzle.pangrams().len()
        );
        for pangram in puzzle.pangrams() {
            println!(
                "   {} {}",
                pangram.to_uppercase().bright_yellow().bold(),
                format!("+{}", puzzle.score(pangram)).green()
            );
        }

        println!(
            "\n📖 {} ({})",
            "Words".bright_cyan().bold(),
            puzzle.words().len()
        );
        for word in puzzle.words() {
            println!("   {:<16} +{}", word.to_uppercase(), puzzle.score(word));
        }
    }
}

/// Print the hive and current score for a session
pub fn print_puzzle_banner(session: &Session, hive: &[char; LETTER_COUNT]) {
    println!("\n{}", "─".repeat(60).cyan());
    for row in hive_rows(hive) {
        println!("{}", row.bright_yellow().bold());
    }
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Score: [{}] {} / {}   Found: {} of {}\n",
        score_bar(session.current_score(), session.maximum_score(), 20).green(),
        session.current_score(),
        session.maximum_score(),
        session.found_words().len(),
        session.puzzle().words().len()
    );
}

/// Print an accepted word
pub fn print_submission(result: &SubmissionResult, maximum_score: u32) {
    if result.is_pangram() {
        println!(
            "{}",
            format!("🎉 PANGRAM! \"{}\" +{}", result.word, result.points)
                .bright_yellow()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("✅ \"{}\" Word found! +{}", result.word, result.points).green()
        );
    }
    println!(
        "   Score: [{}] {} / {}",
        score_bar(result.score_after, maximum_score, 20).green(),
        result.score_after,
        maximum_score
    );
}

/// Print a rejected word
pub fn print_rejection(word: &str, error: SubmissionError) {
    println!("{}", format!("❌ \"{word}\": {error}").red());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Creation:".bright_cyan().bold());
    println!("   Puzzles requested: {}", result.total_puzzles);
    println!(
        "   Created:           {}",
        format!("{}", result.created).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:            {}",
            format!("{}", result.failed).red()
        );
    }
    println!(
        "   Average attempts:  {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest attempts:   {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Most attempts:     {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:    {:.1}", result.puzzles_per_second);

    println!("\n🐝 {}", "Puzzles:".bright_cyan().bold());
    println!("   Average words:     {:.1}", result.average_words);
    println!("   Average pangrams:  {:.2}", result.average_pangrams);
    println!("   Average max score: {:.1}", result.average_max_score);

    if !result.center_distribution.is_empty() {
        println!("\n📈 {}", "Center letters:".bright_cyan().bold());
        for (&center, &count) in &result.center_distribution {
            let pct = (count as f64 / result.created as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!(
                "   {}: {bar} {count:4} ({pct:5.1}%)",
                center.to_ascii_uppercase()
            );
        }
    }

    if let Some(error) = &result.first_error {
        println!("\n{} {error}", "First error:".red().bold());
    }
}
