//! Word lists for pool generation
//!
//! Provides the embedded fallback word list compiled into the binary and
//! file loading/writing utilities for the artifacts.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK, FALLBACK_COUNT};
