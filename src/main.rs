//! Word Pool - CLI
//!
//! Generates the static word lists for a word-guessing game: a deterministic
//! answer pool plus allowed-word list, and a word→definition mapping fetched
//! from a public lexical API.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordpool::{
    commands::{BuildConfig, FetchConfig, run_build, run_fetch},
    dictionary::{API_BASE, DEFAULT_DELAY},
    output::{print_build_summary, print_fetch_summary},
    pool::{DEFAULT_SEED, DEFAULT_TARGET, PoolConfig},
    wordlists::{FALLBACK, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordpool",
    about = "Deterministic answer-pool generator and definition fetcher for a word-guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the answer pool and allowed-word list from a raw candidate list
    Build {
        /// Raw candidate word list
        #[arg(short, long, default_value = "user_words.txt")]
        input: PathBuf,

        /// Answer pool output path
        #[arg(long, default_value = "answers.txt")]
        answers: PathBuf,

        /// Allowed-word list output path (merged with its current contents)
        #[arg(long, default_value = "allowed.txt")]
        allowed: PathBuf,

        /// Shuffle seed
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Answer pool size
        #[arg(short, long, default_value_t = DEFAULT_TARGET)]
        target: usize,
    },

    /// Fetch one short definition per answer-pool word
    Fetch {
        /// Answer pool artifact to read
        #[arg(long, default_value = "answers.txt")]
        answers: PathBuf,

        /// Definition mapping output path
        #[arg(short, long, default_value = "descriptions.json")]
        output: PathBuf,

        /// Milliseconds to pause between requests
        #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
        delay_ms: u64,

        /// Lexical API base URL
        #[arg(long, default_value = API_BASE)]
        api_base: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            answers,
            allowed,
            seed,
            target,
        } => {
            let config = BuildConfig {
                input,
                answers_out: answers,
                allowed_out: allowed,
                pool: PoolConfig::new(seed, target, words_from_slice(FALLBACK)),
            };

            let summary = run_build(&config)?;
            print_build_summary(&summary);
        }
        Commands::Fetch {
            answers,
            output,
            delay_ms,
            api_base,
        } => {
            let config = FetchConfig {
                answers,
                output,
                api_base,
                delay: Duration::from_millis(delay_ms),
            };

            let summary = run_fetch(&config)?;
            print_fetch_summary(&summary);
        }
    }

    Ok(())
}
