//! Word Pool
//!
//! Deterministic word-list generation for a word-guessing game: a seeded,
//! reproducible answer pool with fallback fill, an allowed-word list merge,
//! and a definition fetcher backed by a public lexical API.
//!
//! # Quick Start
//!
//! ```rust
//! use wordpool::core::Word;
//! use wordpool::pool::{PoolConfig, build_pool};
//!
//! let lines = ["Apple", "apple", "brisk", "toast"];
//! let fallback = vec![Word::new("arise").unwrap(), Word::new("civic").unwrap()];
//! let config = PoolConfig::new(42, 5, fallback);
//!
//! let pool = build_pool(&lines, &config).unwrap();
//! assert_eq!(pool.len(), 5);
//! ```

// Core domain types
pub mod core;

// Deterministic pool construction
pub mod pool;

// Word lists and artifact I/O
pub mod wordlists;

// Dictionary definitions
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
