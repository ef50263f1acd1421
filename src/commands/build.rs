//! Answer pool build command
//!
//! Reads the candidate list, builds the pool, merges the allowed list, and
//! writes both artifacts. Nothing touches the filesystem until the pool is
//! complete, so a fatal fill error leaves no partial artifact behind.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::Word;
use crate::pool::{PoolConfig, build_pool, merge_allowed};
use crate::wordlists::loader::{load_allowed_entries, load_raw_lines, write_lines};

/// Configuration for a build run
pub struct BuildConfig {
    /// Raw candidate word list
    pub input: PathBuf,
    /// Answer pool output path
    pub answers_out: PathBuf,
    /// Allowed-word list output path; also read as the pre-existing list
    pub allowed_out: PathBuf,
    /// Pool construction parameters
    pub pool: PoolConfig,
}

/// Result of a build run
pub struct BuildSummary {
    pub answers_written: usize,
    pub allowed_written: usize,
    pub answers_path: PathBuf,
    pub allowed_path: PathBuf,
}

/// Build the answer pool and allowed list artifacts
///
/// A missing candidate list is a warning, not an error: the build continues
/// with an empty candidate set and succeeds if the fallback list alone can
/// reach the target.
///
/// # Errors
///
/// Returns an error if the pool cannot reach its target size or an artifact
/// cannot be read or written.
pub fn run_build(config: &BuildConfig) -> Result<BuildSummary> {
    let lines = match load_raw_lines(&config.input) {
        Ok(lines) => lines,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            eprintln!(
                "{} candidate list not found at {}, continuing with an empty candidate set",
                "Warning:".yellow().bold(),
                config.input.display()
            );
            Vec::new()
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", config.input.display()));
        }
    };

    let pool = build_pool(&lines, &config.pool)?;

    // The output path doubles as the pre-existing list; absent means empty
    let existing = match load_allowed_entries(&config.allowed_out) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", config.allowed_out.display()));
        }
    };
    let allowed = merge_allowed(&existing, &pool);

    let pool_texts: Vec<&str> = pool.iter().map(Word::text).collect();
    write_lines(&config.answers_out, &pool_texts)
        .with_context(|| format!("writing {}", config.answers_out.display()))?;
    write_lines(&config.allowed_out, &allowed)
        .with_context(|| format!("writing {}", config.allowed_out.display()))?;

    Ok(BuildSummary {
        answers_written: pool.len(),
        allowed_written: allowed.len(),
        answers_path: config.answers_out.clone(),
        allowed_path: config.allowed_out.clone(),
    })
}
