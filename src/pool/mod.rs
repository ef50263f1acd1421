//! Deterministic answer-pool construction
//!
//! Builds a fixed-size, duplicate-free answer pool from raw candidate lines
//! and merges it into the allowed-word list.

mod builder;
mod config;

pub use builder::{PoolError, build_pool, merge_allowed};
pub use config::{DEFAULT_SEED, DEFAULT_TARGET, PoolConfig};
