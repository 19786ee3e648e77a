//! Corpus sources
//!
//! A corpus source supplies the normalized word list puzzles are generated
//! from. Sources read at most once and hand out the cached list afterwards.

use super::WORDS;
use super::loader::{load_from_file, words_from_slice};
use log::info;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Error type for corpus loading
#[derive(Debug)]
pub enum CorpusError {
    /// The backing file could not be read
    Unavailable { path: PathBuf, source: io::Error },
    /// The source contained no usable words
    Empty,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "Corpus unavailable at {}: {source}", path.display())
            }
            Self::Empty => write!(f, "Corpus contains no words of 4 or more letters"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// A supplier of normalized corpus words
///
/// Implementations must be idempotent: every successful call returns the
/// same words.
pub trait CorpusSource {
    /// Read the corpus, loading it on first use
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if the words cannot be loaded or none are usable.
    fn read(&self) -> Result<&[String], CorpusError>;
}

/// Corpus compiled into the binary
#[derive(Debug, Default)]
pub struct EmbeddedCorpus {
    words: OnceLock<Vec<String>>,
}

impl EmbeddedCorpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CorpusSource for EmbeddedCorpus {
    fn read(&self) -> Result<&[String], CorpusError> {
        let words = self.words.get_or_init(|| {
            let words = words_from_slice(WORDS);
            info!("Loaded {} embedded corpus words", words.len());
            words
        });

        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(words)
    }
}

/// Corpus read from a text file with one word per line
#[derive(Debug)]
pub struct FileCorpus {
    path: PathBuf,
    words: OnceLock<Vec<String>>,
}

impl FileCorpus {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            words: OnceLock::new(),
        }
    }
}

impl CorpusSource for FileCorpus {
    fn read(&self) -> Result<&[String], CorpusError> {
        // A failed read leaves the cell empty so a later call can retry
        let words = if let Some(words) = self.words.get() {
            words
        } else {
            let loaded = load_from_file(&self.path).map_err(|source| CorpusError::Unavailable {
                path: self.path.clone(),
                source,
            })?;
            info!(
                "Loaded {} corpus words from {}",
                loaded.len(),
                self.path.display()
            );
            self.words.get_or_init(|| loaded)
        };

        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(words)
    }
}

/// Pick a corpus source from a CLI value: `embedded` or a file path
#[must_use]
pub fn source_from_name(name: &str) -> Box<dyn CorpusSource> {
    match name {
        "embedded" => Box::new(EmbeddedCorpus::new()),
        path => Box::new(FileCorpus::new(path)),
    }
}
