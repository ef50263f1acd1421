//! Definition fetch command
//!
//! Reads the answer pool artifact and produces the word→definition mapping
//! by querying the lexical API one word at a time.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::core::Word;
use crate::dictionary::{DictionaryClient, Lookup, fetch_definitions, write_definitions};
use crate::wordlists::loader::load_words;

/// Configuration for a fetch run
pub struct FetchConfig {
    /// Answer pool artifact to read
    pub answers: PathBuf,
    /// Definition mapping output path
    pub output: PathBuf,
    /// Lexical API base URL
    pub api_base: String,
    /// Pause between requests
    pub delay: Duration,
}

/// Result of a fetch run
#[derive(Debug)]
pub struct FetchSummary {
    pub total: usize,
    pub found: usize,
    pub failed: usize,
    pub output_path: PathBuf,
}

/// Fetch a definition for every answer-pool word and write the mapping
///
/// # Errors
///
/// Returns an error if the answer pool artifact is missing or the output
/// cannot be written. Individual lookup failures are not errors; they are
/// recorded as empty definitions.
pub fn run_fetch(config: &FetchConfig) -> Result<FetchSummary> {
    if !config.answers.exists() {
        bail!(
            "answer list not found at {} - run `wordpool build` first",
            config.answers.display()
        );
    }

    let words = load_words(&config.answers)
        .with_context(|| format!("reading {}", config.answers.display()))?;

    let client = DictionaryClient::new(&config.api_base);
    fetch_and_write(&client, config, &words)
}

/// Run the fetch loop against any definition source and write the artifact
fn fetch_and_write<L: Lookup>(
    lookup: &L,
    config: &FetchConfig,
    words: &[Word],
) -> Result<FetchSummary> {
    let report = fetch_definitions(lookup, words, config.delay);

    write_definitions(&config.output, &report.definitions)
        .with_context(|| format!("writing {}", config.output.display()))?;

    Ok(FetchSummary {
        total: words.len(),
        found: report.found,
        failed: report.failed,
        output_path: config.output.clone(),
    })
}
