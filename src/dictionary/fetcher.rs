//! Definition fetch loop
//!
//! Walks the answer pool in order, one blocking lookup per word with a fixed
//! polite pause between requests, and collects a word→definition mapping
//! covering every word. A failed lookup is recorded as an empty string and
//! never aborts the batch.

use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Map, Value};

use crate::core::Word;
use crate::dictionary::client::Lookup;

/// Pause between requests so the public API is not hammered
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Outcome of a fetch run
pub struct FetchReport {
    /// word → definition in pool order; empty string where the lookup failed
    pub definitions: Map<String, Value>,
    /// Lookups that produced a definition
    pub found: usize,
    /// Lookups recorded as empty
    pub failed: usize,
}

/// Fetch one definition per word, strictly sequentially
///
/// Every word ends up in the mapping: a lookup failure of any kind degrades
/// to an empty definition, with a warning naming the failure. No retries.
pub fn fetch_definitions<L: Lookup>(lookup: &L, words: &[Word], delay: Duration) -> FetchReport {
    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut definitions = Map::new();
    let mut found = 0;
    let mut failed = 0;

    for word in words {
        pb.set_message(format!("fetching definition for: {word}"));

        let definition = match lookup.first_definition(word.text()) {
            Ok(text) => {
                found += 1;
                text
            }
            Err(err) => {
                failed += 1;
                pb.println(format!(
                    "{} no definition for '{word}': {err}",
                    "Warning:".yellow().bold()
                ));
                String::new()
            }
        };

        definitions.insert(word.text().to_string(), Value::String(definition));
        pb.inc(1);

        thread::sleep(delay);
    }

    pb.finish_and_clear();

    FetchReport {
        definitions,
        found,
        failed,
    }
}

/// Write the definitions artifact as pretty-printed JSON, in one shot
///
/// # Errors
///
/// Returns an I/O error if serialization fails or the file cannot be written.
pub fn write_definitions<P: AsRef<Path>>(
    path: P,
    definitions: &Map<String, Value>,
) -> io::Result<()> {
    let mut json = serde_json::to_string_pretty(definitions)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    json.push('\n');

    std::fs::write(path, json)
}
