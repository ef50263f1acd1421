//! Command implementations

pub mod build;
pub mod fetch;

pub use build::{BuildConfig, BuildSummary, run_build};
pub use fetch::{FetchConfig, FetchSummary, run_fetch};
