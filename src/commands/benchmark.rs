//! Benchmark command
//!
//! Generates many random puzzles from the corpus to measure how quickly the
//! creator finds acceptable letter sets.

use crate::generator::{CreationError, PuzzleCreator};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub created: usize,
    pub failed: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub average_words: f64,
    pub average_pangrams: f64,
    pub average_max_score: f64,
    /// How often each letter ended up as the center
    pub center_distribution: BTreeMap<char, usize>,
    /// First error seen, if any puzzle could not be created
    pub first_error: Option<CreationError>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

struct Sample {
    attempts: usize,
    words: usize,
    pangrams: usize,
    max_score: u32,
    center: char,
}

/// Create `count` random puzzles in parallel
///
/// Puzzle `i` uses its own rng seeded with `seed + i`, so a run is
/// reproducible regardless of thread scheduling.
pub fn run_benchmark(creator: &PuzzleCreator, count: usize, seed: u64) -> BenchmarkResult {
    let pb = ProgressBar::new(count as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("creating puzzles");

    let start = Instant::now();

    let outcomes: Vec<Result<Sample, CreationError>> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let outcome = creator
                .create_random_with_attempts(&mut rng)
                .map(|(puzzle, attempts)| Sample {
                    attempts,
                    words: puzzle.words().len(),
                    pangrams: puzzle.pangrams().len(),
                    max_score: puzzle.maximum_score(),
                    center: puzzle.center(),
                });
            pb.inc(1);
            outcome
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_with_message("done");

    summarize(outcomes, duration)
}

fn summarize(outcomes: Vec<Result<Sample, CreationError>>, duration: Duration) -> BenchmarkResult {
    let total_puzzles = outcomes.len();
    let mut samples = Vec::with_capacity(total_puzzles);
    let mut first_error = None;

    for outcome in outcomes {
        match outcome {
            Ok(sample) => samples.push(sample),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    let created = samples.len();
    let mean = |total: usize| {
        if created == 0 {
            0.0
        } else {
            total as f64 / created as f64
        }
    };

    let total_attempts: usize = samples.iter().map(|s| s.attempts).sum();
    let total_words: usize = samples.iter().map(|s| s.words).sum();
    let total_pangrams: usize = samples.iter().map(|s| s.pangrams).sum();
    let total_score: usize = samples.iter().map(|s| s.max_score as usize).sum();

    let mut center_distribution = BTreeMap::new();
    for sample in &samples {
        *center_distribution.entry(sample.center).or_insert(0) += 1;
    }

    BenchmarkResult {
        total_puzzles,
        created,
        failed: total_puzzles - created,
        total_attempts,
        average_attempts: mean(total_attempts),
        min_attempts: samples.iter().map(|s| s.attempts).min().unwrap_or(0),
        max_attempts: samples.iter().map(|s| s.attempts).max().unwrap_or(0),
        average_words: mean(total_words),
        average_pangrams: mean(total_pangrams),
        average_max_score: mean(total_score),
        center_distribution,
        first_error,
        duration,
        puzzles_per_second: if duration.as_secs_f64() > 0.0 {
            total_puzzles as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::fixtures;
    use crate::generator::{AcceptanceError, CreatorConfig};

    #[test]
    fn benchmark_creates_every_puzzle() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);

        let result = run_benchmark(&creator, 8, 100);
        assert_eq!(result.total_puzzles, 8);
        assert_eq!(result.created, 8);
        assert_eq!(result.failed, 0);
        assert!(result.first_error.is_none());
        assert!(result.average_attempts >= 1.0);
        assert!(result.min_attempts <= result.max_attempts);
        assert_eq!(result.center_distribution.values().sum::<usize>(), 8);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);

        let first = run_benchmark(&creator, 6, 7);
        let second = run_benchmark(&creator, 6, 7);
        assert_eq!(first.total_attempts, second.total_attempts);
        assert_eq!(first.center_distribution, second.center_distribution);
    }

    #[test]
    fn benchmark_reports_failures() {
        let corpus: Vec<String> = vec![fixtures::PANGRAM.to_string()];
        let creator = PuzzleCreator::with_config(&corpus, CreatorConfig { max_attempts: 3 });

        let result = run_benchmark(&creator, 4, 0);
        assert_eq!(result.created, 0);
        assert_eq!(result.failed, 4);
        assert_eq!(result.average_attempts, 0.0);
        assert!(matches!(
            result.first_error,
            Some(CreationError::AttemptsExhausted {
                attempts: 3,
                last: AcceptanceError::WordCountOutOfRange(1)
            })
        ));
    }
}
