//! Gameplay
//!
//! Session state and word submission for a single player.

mod session;

pub use session::{Session, SubmissionError, SubmissionResult};
