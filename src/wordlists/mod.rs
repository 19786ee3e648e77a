//! Word lists for Spelling Bee
//!
//! Provides the embedded corpus compiled into the binary, file loading with
//! normalization, and the `CorpusSource` abstraction the generator reads from.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{CorpusError, CorpusSource, EmbeddedCorpus, FileCorpus, source_from_name};
