//! Kelimece - CLI
//!
//! Daily Turkish word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kelimece::{
    commands::{run_check, run_reveal, run_simple},
    game::{JsonFileStore, daily},
    interactive::{App, run_tui},
    wordlists::WordList,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kelimece",
    about = "Daily Turkish word-guessing game with Turkish-aware letter handling",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length to play (the bundled list covers 4-6)
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Directory where sessions are saved
    #[arg(long, global = true, default_value = ".kelimece")]
    save_dir: PathBuf,

    /// Ignore any saved session and start today's game over
    #[arg(short, long, global = true)]
    fresh: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Print the word of the day
    Reveal {
        /// Day number (whole days since the Unix epoch); defaults to today
        #[arg(long)]
        day: Option<u64>,
    },

    /// Check whether words are in the dictionary
    Check {
        /// Words to look up
        words: Vec<String>,
    },
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "embedded" => Ok(WordList::embedded()),
        path => {
            WordList::load(path).with_context(|| format!("failed to load word list from {path}"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let store = JsonFileStore::new(&cli.save_dir);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, &store, cli.length, cli.fresh),
        Commands::Simple => run_simple(&words, &store, cli.length, cli.fresh),
        Commands::Reveal { day } => run_reveal(&words, cli.length, day),
        Commands::Check { words: candidates } => {
            run_check(&words, &candidates);
            Ok(())
        }
    }
}

fn run_play_command(
    words: &WordList,
    store: &JsonFileStore,
    length: usize,
    fresh: bool,
) -> Result<()> {
    let app = App::new(words, store, length, daily::today(), fresh)?;
    run_tui(app)
}
