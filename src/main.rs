//! Spelling Bee - CLI
//!
//! Spelling Bee puzzle generator and game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spelling_bee::{
    commands::{create_puzzle, run_benchmark, run_simple},
    generator::{CreatorConfig, DEFAULT_MAX_ATTEMPTS, PuzzleCreator},
    output::{print_benchmark_result, print_create_result},
    wordlists::{CorpusSource, source_from_name},
};
use std::fs::OpenOptions;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling Bee puzzle generator and game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus: 'embedded' (default) or a word file, one word per line
    ///
    /// The compiled-in list only covers a handful of letter families, so
    /// puzzles repeat quickly. Pass a full dictionary such as
    /// /usr/share/dict/words for varied play.
    #[arg(short, long, global = true, default_value = "embedded")]
    corpus: String,

    /// Seed for reproducible puzzles (default: OS entropy)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Random letter sets to try before giving up on a corpus
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Seven distinct letters; the fourth is the center (default: random)
        #[arg(short, long)]
        letters: Option<String>,
    },

    /// Simple CLI game (line-based, without TUI)
    Simple {
        /// Seven distinct letters; the fourth is the center (default: random)
        #[arg(short, long)]
        letters: Option<String>,
    },

    /// Create one puzzle and print its statistics
    Create {
        /// Seven distinct letters; the fourth is the center (default: random)
        #[arg(short, long)]
        letters: Option<String>,

        /// Also list every pangram and word
        #[arg(short, long)]
        reveal: bool,
    },

    /// Measure random puzzle creation over many seeds
    Benchmark {
        /// Number of puzzles to create
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Send logs to `log_file` when given, otherwise to stderr
///
/// The level comes from `RUST_LOG` and defaults to `warn`.
fn init_logging(log_file: Option<&str>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let source = source_from_name(&cli.corpus);
    let corpus = source
        .read()
        .with_context(|| format!("failed to load corpus '{}'", cli.corpus))?;
    info!("corpus '{}' has {} words", cli.corpus, corpus.len());

    let config = CreatorConfig {
        max_attempts: cli.max_attempts,
    };
    let creator = PuzzleCreator::with_config(corpus, config);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { letters: None });

    match command {
        Commands::Play { letters } => run_play_command(&creator, letters.as_deref(), rng),
        Commands::Simple { letters } => {
            run_simple(&creator, letters.as_deref(), &mut rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Create { letters, reveal } => {
            run_create_command(&creator, letters.as_deref(), reveal, &mut rng)
        }
        Commands::Benchmark { count } => {
            let seed = cli.seed.unwrap_or_else(|| rng.random());
            run_benchmark_command(&creator, &cli.corpus, count, seed);
            Ok(())
        }
    }
}

fn run_create_command(
    creator: &PuzzleCreator,
    letters: Option<&str>,
    reveal: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let result = create_puzzle(creator, letters, rng)?;
    print_create_result(&result, reveal);
    Ok(())
}

fn run_benchmark_command(creator: &PuzzleCreator, corpus_name: &str, count: usize, seed: u64) {
    println!("Creating {count} random puzzles from the '{corpus_name}' corpus (seed {seed})...");

    let result = run_benchmark(creator, count, seed);
    print_benchmark_result(&result);
}

fn run_play_command(creator: &PuzzleCreator, letters: Option<&str>, rng: StdRng) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    let app = App::new(creator, letters, rng)?;
    run_tui(app)
}
