//! Termo - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use termo::{
    commands::{check_guess, run_simple},
    game::{GameConfig, MAX_ROWS, WORD_LENGTH},
    interactive::{App, run_tui},
    logging,
    output::print_guess,
    session::Session,
    wordlists::WordList,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "termo",
    about = "Guess the secret word, with accent-aware letter scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = WORD_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = MAX_ROWS)]
    rows: usize,

    /// Seed for reproducible secret words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Accept any well-formed word as a guess, not only dictionary words
    #[arg(long, global = true)]
    any_word: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a single guess against a secret word
    Check {
        /// The guess
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Load the word list selected with -w
fn load_wordlist(wordlist: &str, length: usize) -> Result<WordList> {
    match wordlist {
        "embedded" => WordList::embedded(length).context("cannot start: no usable words"),
        path => WordList::load_from_file(path, length)
            .with_context(|| format!("cannot start: failed to load word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs when given a file
    let tui_without_file = matches!(command, Commands::Play) && cli.log_file.is_none();
    if !tui_without_file {
        logging::init(cli.verbose, cli.log_file.as_deref())?;
    }

    let config = GameConfig::new(cli.length, cli.rows);
    config.validate().context("invalid game configuration")?;
    debug!(?config, "starting");

    match command {
        Commands::Check { guess, secret } => run_check_command(&guess, &secret, config.word_length),
        Commands::Simple => {
            let mut session = start_session(&cli.wordlist, config, cli.seed, cli.any_word)?;
            run_simple(&mut session)
        }
        Commands::Play => {
            let session = start_session(&cli.wordlist, config, cli.seed, cli.any_word)?;
            run_tui(App::new(session))
        }
    }
}

fn start_session(
    wordlist: &str,
    config: GameConfig,
    seed: Option<u64>,
    any_word: bool,
) -> Result<Session> {
    let words = load_wordlist(wordlist, config.word_length)?;
    Session::new(words, config, seed, any_word).context("cannot start game")
}

fn run_check_command(guess: &str, secret: &str, length: usize) -> Result<()> {
    let result = check_guess(guess, secret, length)
        .with_context(|| format!("cannot score '{guess}' against '{secret}'"))?;
    print_guess(1, &result);
    Ok(())
}
