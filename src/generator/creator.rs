//! Puzzle creation
//!
//! Drives the word filter and only hands out puzzles that are fair to play:
//! at least one pangram, a sensible number of answers and a sensible maximum
//! score.

use super::filter::{FilterError, FilteredWords, WordFilter};
use crate::core::{LetterSet, LetterSetError, Puzzle};
use log::{debug, info};
use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;

/// Accepted number of answers
pub const WORD_COUNT_RANGE: RangeInclusive<usize> = 20..=80;

/// Accepted maximum score
pub const SCORE_RANGE: RangeInclusive<u32> = 100..=400;

/// Default bound on random draws before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Creator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatorConfig {
    /// Random draws allowed per `create_random` call (at least one is always made)
    pub max_attempts: usize,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Why a filtered word list does not make a fair puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptanceError {
    NoPangram,
    WordCountOutOfRange(usize),
    ScoreOutOfRange(u32),
}

impl fmt::Display for AcceptanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPangram => write!(f, "No pangram found for these letters"),
            Self::WordCountOutOfRange(count) => write!(
                f,
                "Word count {count} is not within {}-{}",
                WORD_COUNT_RANGE.start(),
                WORD_COUNT_RANGE.end()
            ),
            Self::ScoreOutOfRange(score) => write!(
                f,
                "Total score {score} is not within {}-{}",
                SCORE_RANGE.start(),
                SCORE_RANGE.end()
            ),
        }
    }
}

impl std::error::Error for AcceptanceError {}

/// Error type for puzzle creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationError {
    /// User supplied letters are malformed
    Letters(LetterSetError),
    /// User supplied letters do not make a fair puzzle
    Rejected(AcceptanceError),
    /// The corpus cannot seed a random letter set
    NoPangramCandidates,
    /// Every random draw was rejected
    AttemptsExhausted {
        attempts: usize,
        last: AcceptanceError,
    },
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letters(e) => write!(f, "{e}"),
            Self::Rejected(e) => write!(f, "{e}"),
            Self::NoPangramCandidates => write!(f, "{}", FilterError::NoPangramCandidates),
            Self::AttemptsExhausted { attempts, last } => write!(
                f,
                "Corpus too small or unsuitable: no acceptable puzzle after {attempts} attempts (last: {last})"
            ),
        }
    }
}

impl std::error::Error for CreationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Letters(e) => Some(e),
            Self::Rejected(e) | Self::AttemptsExhausted { last: e, .. } => Some(e),
            Self::NoPangramCandidates => None,
        }
    }
}

impl From<LetterSetError> for CreationError {
    fn from(e: LetterSetError) -> Self {
        Self::Letters(e)
    }
}

impl From<AcceptanceError> for CreationError {
    fn from(e: AcceptanceError) -> Self {
        Self::Rejected(e)
    }
}

impl From<FilterError> for CreationError {
    fn from(e: FilterError) -> Self {
        match e {
            FilterError::NoPangramCandidates => Self::NoPangramCandidates,
        }
    }
}

/// Check a filtered word list against the fairness bounds
///
/// Checks run in order: pangram present, word count, total score.
///
/// # Errors
///
/// Returns the first `AcceptanceError` that applies.
pub fn check_acceptable(filtered: &FilteredWords) -> Result<(), AcceptanceError> {
    if filtered.pangrams.is_empty() {
        return Err(AcceptanceError::NoPangram);
    }

    let count = filtered.words.len();
    if !WORD_COUNT_RANGE.contains(&count) {
        return Err(AcceptanceError::WordCountOutOfRange(count));
    }

    let score = filtered.total_score();
    if !SCORE_RANGE.contains(&score) {
        return Err(AcceptanceError::ScoreOutOfRange(score));
    }

    Ok(())
}

/// Puzzle creator over a fixed corpus
///
/// Random creation needs a corpus that can actually satisfy the bounds; on a
/// degenerate corpus it gives up after `max_attempts` draws.
pub struct PuzzleCreator<'a> {
    filter: WordFilter<'a>,
    config: CreatorConfig,
}

impl<'a> PuzzleCreator<'a> {
    /// Create a puzzle creator with default settings
    #[must_use]
    pub fn new(corpus: &'a [String]) -> Self {
        Self::with_config(corpus, CreatorConfig::default())
    }

    #[must_use]
    pub fn with_config(corpus: &'a [String], config: CreatorConfig) -> Self {
        Self {
            filter: WordFilter::new(corpus),
            config,
        }
    }

    /// Create a puzzle from user supplied letters
    ///
    /// Letters are validated first (length, alphabet, uniqueness), then the
    /// filtered words are checked against the fairness bounds. Nothing is
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns `CreationError::Letters` for malformed letters and
    /// `CreationError::Rejected` when the letters do not make a fair puzzle.
    pub fn create_from_letters(&self, letters: &str) -> Result<Puzzle, CreationError> {
        let letters = LetterSet::parse(letters)?;
        let filtered = self.filter.filter_with_letters(&letters);
        check_acceptable(&filtered)?;

        info!(
            "Created puzzle {letters}: {} words, {} pangrams",
            filtered.words.len(),
            filtered.pangrams.len()
        );
        Ok(Puzzle::new(letters, filtered.words, filtered.pangrams))
    }

    /// Create a puzzle from random letters
    ///
    /// # Errors
    ///
    /// See [`PuzzleCreator::create_random_with_attempts`].
    pub fn create_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Puzzle, CreationError> {
        self.create_random_with_attempts(rng)
            .map(|(puzzle, _)| puzzle)
    }

    /// Create a puzzle from random letters, also reporting the draws it took
    ///
    /// Rejected draws are silently resampled, up to `max_attempts` draws.
    ///
    /// # Errors
    ///
    /// Returns `CreationError::NoPangramCandidates` if the corpus has no word
    /// with seven distinct letters, or `CreationError::AttemptsExhausted` if
    /// no draw passed the fairness bounds.
    pub fn create_random_with_attempts<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Puzzle, usize), CreationError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut last = AcceptanceError::NoPangram;

        for attempt in 1..=max_attempts {
            let (filtered, letters) = self.filter.filter_random(rng)?;

            match check_acceptable(&filtered) {
                Ok(()) => {
                    info!(
                        "Created random puzzle {letters} after {attempt} attempt(s): {} words, {} pangrams",
                        filtered.words.len(),
                        filtered.pangrams.len()
                    );
                    let puzzle = Puzzle::new(letters, filtered.words, filtered.pangrams);
                    return Ok((puzzle, attempt));
                }
                Err(e) => {
                    debug!("Attempt {attempt}: rejected {letters}: {e}");
                    last = e;
                }
            }
        }

        Err(CreationError::AttemptsExhausted {
            attempts: max_attempts,
            last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::fixtures::{self, LETTERS, PANGRAM};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn creates_puzzle_from_letters() {
        let corpus = fixtures::corpus();
        let puzzle = PuzzleCreator::new(&corpus)
            .create_from_letters(LETTERS)
            .unwrap();

        assert_eq!(puzzle.letters().to_string(), LETTERS);
        assert_eq!(puzzle.center(), 'd');
        assert_eq!(puzzle.words().len(), 31);
        assert_eq!(puzzle.pangrams(), &[PANGRAM.to_string()]);
        assert_eq!(puzzle.maximum_score(), 101);
    }

    #[test]
    fn every_word_is_spelled_from_the_set_and_has_the_center() {
        let puzzle = fixtures::puzzle();
        for word in puzzle.words() {
            assert!(puzzle.letters().spells(word), "{word}");
            assert!(word.contains(puzzle.center()), "{word}");
        }
        for pangram in puzzle.pangrams() {
            assert!(puzzle.contains(pangram));
        }
    }

    #[test]
    fn letter_checks_run_before_filtering() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);

        assert_eq!(
            creator.create_from_letters("abcdef"),
            Err(CreationError::Letters(LetterSetError::InvalidLetterCount(6)))
        );
        assert_eq!(
            creator.create_from_letters("abcdef1"),
            Err(CreationError::Letters(LetterSetError::UnsupportedLetter('1')))
        );
        assert_eq!(
            creator.create_from_letters("abcdefa"),
            Err(CreationError::Letters(LetterSetError::DuplicateLetter('a')))
        );
    }

    #[test]
    fn rejects_letters_without_pangram() {
        let mut corpus = fixtures::filler_words(30);
        corpus.push("abcdef".to_string());
        let creator = PuzzleCreator::new(&corpus);

        assert_eq!(
            creator.create_from_letters(LETTERS),
            Err(CreationError::Rejected(AcceptanceError::NoPangram))
        );
    }

    #[test]
    fn rejects_too_few_words() {
        let mut corpus = strings(&[PANGRAM]);
        corpus.extend(fixtures::filler_words(10));
        let creator = PuzzleCreator::new(&corpus);

        assert_eq!(
            creator.create_from_letters(LETTERS),
            Err(CreationError::Rejected(
                AcceptanceError::WordCountOutOfRange(11)
            ))
        );
    }

    #[test]
    fn rejects_too_many_words() {
        let mut corpus = strings(&[PANGRAM]);
        corpus.extend(fixtures::filler_words(80));
        let creator = PuzzleCreator::new(&corpus);

        assert_eq!(
            creator.create_from_letters(LETTERS),
            Err(CreationError::Rejected(
                AcceptanceError::WordCountOutOfRange(81)
            ))
        );
    }

    #[test]
    fn rejects_low_score() {
        // 25 four-letter words: 25 points plus 11 for the pangram
        let mut corpus = strings(&[PANGRAM]);
        corpus.extend(
            fixtures::filler_words(25)
                .into_iter()
                .map(|w| w[..4].to_string()),
        );
        let creator = PuzzleCreator::new(&corpus);

        assert_eq!(
            creator.create_from_letters(LETTERS),
            Err(CreationError::Rejected(AcceptanceError::ScoreOutOfRange(36)))
        );
    }

    /// The fixture pangram plus one filler word per entry of `lengths`
    ///
    /// Fillers are cut or padded with `a` to the given length; a filler of
    /// length `n` is worth `n - 3` points.
    fn corpus_with_lengths(lengths: &[usize]) -> Vec<String> {
        let mut corpus = strings(&[PANGRAM]);
        corpus.extend(
            fixtures::filler_words(lengths.len())
                .into_iter()
                .zip(lengths)
                .map(|(word, &len)| {
                    if len <= word.len() {
                        word[..len].to_string()
                    } else {
                        format!("{word}{}", "a".repeat(len - word.len()))
                    }
                }),
        );
        corpus
    }

    fn create(corpus: &[String]) -> Result<Puzzle, CreationError> {
        PuzzleCreator::new(corpus).create_from_letters(LETTERS)
    }

    #[test]
    fn word_count_bounds_are_inclusive() {
        let lowest = create(&corpus_with_lengths(&[9; 19])).unwrap();
        assert_eq!(lowest.words().len(), 20);
        assert_eq!(lowest.maximum_score(), 125);

        let highest = create(&corpus_with_lengths(&[6; 79])).unwrap();
        assert_eq!(highest.words().len(), 80);
        assert_eq!(highest.maximum_score(), 248);

        assert_eq!(
            create(&corpus_with_lengths(&[9; 18])),
            Err(CreationError::Rejected(
                AcceptanceError::WordCountOutOfRange(19)
            ))
        );
    }

    #[test]
    fn score_bounds_are_inclusive() {
        let mut lengths = vec![6; 29];
        lengths.push(5);
        let lowest = create(&corpus_with_lengths(&lengths)).unwrap();
        assert_eq!(lowest.maximum_score(), 100);

        lengths[29] = 4;
        assert_eq!(
            create(&corpus_with_lengths(&lengths)),
            Err(CreationError::Rejected(AcceptanceError::ScoreOutOfRange(99)))
        );

        let mut lengths = vec![13; 38];
        lengths.push(12);
        let highest = create(&corpus_with_lengths(&lengths)).unwrap();
        assert_eq!(highest.words().len(), 40);
        assert_eq!(highest.maximum_score(), 400);
    }

    #[test]
    fn rejects_high_score() {
        assert_eq!(
            create(&corpus_with_lengths(&[13; 39])),
            Err(CreationError::Rejected(AcceptanceError::ScoreOutOfRange(401)))
        );
    }

    #[test]
    fn pangram_check_comes_first() {
        // Too few words and no pangram: the pangram rejection wins
        let corpus = strings(&["dace", "faded"]);
        let creator = PuzzleCreator::new(&corpus);

        assert_eq!(
            creator.create_from_letters(LETTERS),
            Err(CreationError::Rejected(AcceptanceError::NoPangram))
        );
    }

    #[test]
    fn random_creation_yields_valid_puzzle() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut rng = StdRng::seed_from_u64(3);

        let (puzzle, attempts) = creator.create_random_with_attempts(&mut rng).unwrap();
        assert!(attempts >= 1);
        assert!(!puzzle.pangrams().is_empty());
        assert!(WORD_COUNT_RANGE.contains(&puzzle.words().len()));
        assert!(SCORE_RANGE.contains(&puzzle.maximum_score()));
        for word in puzzle.words() {
            assert!(word.contains(puzzle.center()));
        }
    }

    #[test]
    fn random_creation_is_deterministic_for_a_seed() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);

        let first = creator.create_random(&mut StdRng::seed_from_u64(11)).unwrap();
        let second = creator.create_random(&mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_creation_is_bounded() {
        let corpus = strings(&[PANGRAM, "dace"]);
        let config = CreatorConfig { max_attempts: 5 };
        let creator = PuzzleCreator::with_config(&corpus, config);
        let mut rng = StdRng::seed_from_u64(0);

        match creator.create_random(&mut rng) {
            Err(CreationError::AttemptsExhausted { attempts, last }) => {
                assert_eq!(attempts, 5);
                assert!(matches!(last, AcceptanceError::WordCountOutOfRange(_)));
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn zero_attempts_still_draws_once() {
        let corpus = strings(&[PANGRAM]);
        let config = CreatorConfig { max_attempts: 0 };
        let creator = PuzzleCreator::with_config(&corpus, config);

        let err = creator
            .create_random(&mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(
            err,
            CreationError::AttemptsExhausted { attempts: 1, .. }
        ));
    }

    #[test]
    fn random_creation_without_candidates() {
        let corpus = strings(&["dace", "faded"]);
        let creator = PuzzleCreator::new(&corpus);

        assert_eq!(
            creator.create_random(&mut StdRng::seed_from_u64(0)),
            Err(CreationError::NoPangramCandidates)
        );
    }

    #[test]
    fn embedded_corpus_produces_random_puzzles() {
        use crate::wordlists::{CorpusSource, EmbeddedCorpus};

        let source = EmbeddedCorpus::new();
        let corpus = source.read().unwrap();
        let creator = PuzzleCreator::new(corpus);
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..5 {
            let puzzle = creator.create_random(&mut rng).unwrap();
            assert!(WORD_COUNT_RANGE.contains(&puzzle.words().len()));
        }
    }

    #[test]
    fn embedded_corpus_varies_the_letter_set() {
        use crate::wordlists::{CorpusSource, EmbeddedCorpus};
        use std::collections::BTreeSet;

        let source = EmbeddedCorpus::new();
        let creator = PuzzleCreator::new(source.read().unwrap());
        let mut rng = StdRng::seed_from_u64(7);

        let sets: BTreeSet<String> = (0..40)
            .map(|_| {
                let puzzle = creator.create_random(&mut rng).unwrap();
                let mut letters: Vec<char> = puzzle.letters().to_string().chars().collect();
                letters.sort_unstable();
                letters.into_iter().collect()
            })
            .collect();

        assert!(sets.len() >= 3, "only {sets:?}");
    }

    #[test]
    fn errors_display_messages() {
        assert_eq!(
            AcceptanceError::WordCountOutOfRange(5).to_string(),
            "Word count 5 is not within 20-80"
        );
        assert_eq!(
            AcceptanceError::ScoreOutOfRange(42).to_string(),
            "Total score 42 is not within 100-400"
        );
        let err = CreationError::from(LetterSetError::DuplicateLetter('e'));
        assert_eq!(err.to_string(), "Letters are not unique, 'e' repeats");
    }
}
