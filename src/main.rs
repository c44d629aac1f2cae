//! Wordle - CLI
//!
//! Terminal Wordle with an animated TUI, a line-based mode and a one-shot checker.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use wordle_tui::{
    animation::SystemClock,
    commands::{check_guess, run_simple},
    game::{GameSession, Statistics},
    interactive::{App, run_tui},
    output::print_check_result,
    wordlists::{DEFAULT_OCCURRENCE_THRESHOLD, WordBank, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list CSV with 'word' and 'occurrence' columns (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Minimum occurrence score for a word to be playable
    #[arg(short, long, global = true, default_value_t = DEFAULT_OCCURRENCE_THRESHOLD)]
    threshold: f64,

    /// Seed for target selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write log output to this file (RUST_LOG sets the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Show the feedback for one guess against a chosen target
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Logging to stderr would draw over the alternate screen
    let stderr_allowed = !matches!(command, Commands::Play);
    init_logging(cli.log_file.as_deref(), stderr_allowed)?;

    if cli.threshold < 0.0 {
        log::warn!("negative threshold {} accepts every word", cli.threshold);
    }

    let source = cli.words.map_or(WordSource::Embedded, WordSource::File);
    let bank = WordBank::load(&source, cli.threshold)
        .with_context(|| format!("failed to load word list from {source}"))?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match command {
        Commands::Play => {
            let session = GameSession::new(&bank, SystemClock::new(), rng);
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = GameSession::new(&bank, SystemClock::new(), rng);
            let mut stats = Statistics::default();
            run_simple(&mut session, &mut stats).context("simple mode I/O failed")
        }
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target, &bank)?;
            print_check_result(&result);
            Ok(())
        }
    }
}

fn init_logging(log_file: Option<&Path>, stderr_allowed: bool) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if stderr_allowed => {}
        None => return Ok(()),
    }

    builder.try_init()?;
    Ok(())
}
