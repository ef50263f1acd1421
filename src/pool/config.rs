//! Pool building configuration
//!
//! The builder takes its seed, target size, and fallback words as an explicit
//! value rather than reading ambient constants, so it can be exercised with
//! arbitrary configurations.

use crate::core::Word;
use crate::wordlists::{FALLBACK, loader::words_from_slice};

/// Seed used for the production answer pool
pub const DEFAULT_SEED: u64 = 42;

/// Size of the production answer pool (one word per day of the year)
pub const DEFAULT_TARGET: usize = 365;

/// Configuration for building an answer pool
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Seed for the deterministic shuffle
    pub seed: u64,
    /// Exact number of words in the finished pool
    pub target: usize,
    /// Words used to pad the pool when candidates run short
    pub fallback: Vec<Word>,
}

impl PoolConfig {
    /// Create a configuration with an explicit fallback set
    #[must_use]
    pub const fn new(seed: u64, target: usize, fallback: Vec<Word>) -> Self {
        Self {
            seed,
            target,
            fallback,
        }
    }
}

impl Default for PoolConfig {
    /// Production configuration: seed 42, 365 words, embedded fallback list
    fn default() -> Self {
        Self::new(DEFAULT_SEED, DEFAULT_TARGET, words_from_slice(FALLBACK))
    }
}
