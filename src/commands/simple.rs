//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::normalize_letters;
use crate::game::Session;
use crate::generator::PuzzleCreator;
use crate::output::display::{print_puzzle_banner, print_rejection, print_submission};
use crate::output::formatters::plural;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Word(String),
    Shuffle,
    Found,
    Reveal,
    New,
    Help,
    Quit,
    Empty,
}

impl Input {
    /// Parse one line of player input
    ///
    /// Lines starting with `:` are commands; anything else is a word,
    /// trimmed and lower-cased.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        match line.strip_prefix(':') {
            Some(command) => match command.to_lowercase().as_str() {
                "s" | "shuffle" => Self::Shuffle,
                "f" | "found" => Self::Found,
                "r" | "reveal" => Self::Reveal,
                "n" | "new" => Self::New,
                "q" | "quit" | "exit" => Self::Quit,
                _ => Self::Help,
            },
            None => Self::Word(line.to_lowercase()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// The first puzzle uses `letters` when given; every later puzzle is random.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a
/// puzzle cannot be created.
pub fn run_simple<R: Rng + ?Sized>(
    creator: &PuzzleCreator,
    letters: Option<&str>,
    rng: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Spelling Bee - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make words of 4 or more letters using the letters in the hive.");
    println!("Every word must use the center letter; letters may repeat.\n");
    print_help();

    let first = match letters {
        Some(letters) => creator.create_from_letters(&normalize_letters(letters)),
        None => creator.create_random(rng),
    };
    let mut session = Session::new(first.map_err(|e| e.to_string())?);
    let mut hive = session.puzzle().letters().hive(rng);
    print_puzzle_banner(&session, &hive);

    loop {
        let line = get_user_input("Word")?;

        match Input::parse(&line) {
            Input::Empty => {}
            Input::Help => print_help(),
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::Shuffle => {
                hive = session.puzzle().letters().hive(rng);
                print_puzzle_banner(&session, &hive);
            }
            Input::Found => print_found(&session),
            Input::Reveal => {
                print_remaining(&session);
                if !ask_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                session = new_session(creator, rng)?;
                hive = session.puzzle().letters().hive(rng);
                print_puzzle_banner(&session, &hive);
            }
            Input::New => {
                session = new_session(creator, rng)?;
                hive = session.puzzle().letters().hive(rng);
                println!("\n🔄 New puzzle started!");
                print_puzzle_banner(&session, &hive);
            }
            Input::Word(word) => match session.check(&word) {
                Ok(result) => {
                    print_submission(&result, session.maximum_score());

                    if session.is_complete() {
                        print_completion(&session);
                        if !ask_play_again()? {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        session = new_session(creator, rng)?;
                        hive = session.puzzle().letters().hive(rng);
                        print_puzzle_banner(&session, &hive);
                    }
                }
                Err(e) => print_rejection(&word, e),
            },
        }
    }
}

fn new_session<R: Rng + ?Sized>(creator: &PuzzleCreator, rng: &mut R) -> Result<Session, String> {
    creator
        .create_random(rng)
        .map(Session::new)
        .map_err(|e| e.to_string())
}

fn print_help() {
    println!("Commands: ':shuffle' to shuffle the hive, ':found' to list your words,");
    println!("          ':reveal' to give up and see the answers, ':new' for a new puzzle,");
    println!("          ':quit' to exit\n");
}

fn print_found(session: &Session) {
    let found = session.found_words();
    println!(
        "\nYou have found {} of {}:",
        plural(found.len(), "word"),
        session.puzzle().words().len()
    );
    for word in found {
        if session.puzzle().is_pangram(word) {
            println!("  • {}", word.to_uppercase().bright_yellow().bold());
        } else {
            println!("  • {}", word.to_uppercase());
        }
    }
    println!();
}

fn print_remaining(session: &Session) {
    let remaining = session.remaining_words();
    println!("\nYou missed {}:", plural(remaining.len(), "word"));
    for word in remaining {
        if session.puzzle().is_pangram(word) {
            println!("  • {}", word.to_uppercase().bright_yellow().bold());
        } else {
            println!("  • {}", word.to_uppercase().bright_black());
        }
    }
    println!(
        "\nFinal score: {} / {}\n",
        session.current_score().to_string().bright_cyan().bold(),
        session.maximum_score()
    );
}

fn print_completion(session: &Session) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🐝 🍯 ✨  Q U E E N   B E E !  ✨ 🍯 🐝    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  All {} found for {} points.\n",
        plural(session.found_words().len(), "word"),
        session.current_score().to_string().bright_cyan().bold()
    );
}

fn ask_play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        // End of input behaves like ':quit'
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}
