//! Core domain types
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear validation rules.

mod word;

pub use word::{Word, WordError};
