//! Spelling Bee
//!
//! Generates seven-letter Spelling Bee puzzles from a word corpus and plays
//! them: validating words, scoring them and tracking progress.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::game::Session;
//! use spelling_bee::generator::PuzzleCreator;
//! use spelling_bee::wordlists::{CorpusSource, EmbeddedCorpus};
//!
//! let source = EmbeddedCorpus::new();
//! let corpus = source.read().unwrap();
//! let creator = PuzzleCreator::new(corpus);
//!
//! // Letters are given as seven distinct lowercase letters; the fourth is the center
//! let puzzle = creator.create_from_letters("planter").unwrap();
//! assert_eq!(puzzle.center(), 'n');
//!
//! let mut session = Session::new(puzzle);
//! let result = session.check("planter").unwrap();
//! assert!(result.is_pangram());
//! ```

// Core domain types
pub mod core;

// Puzzle filtering and creation
pub mod generator;

// Play sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
