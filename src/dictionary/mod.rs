//! Dictionary definitions
//!
//! A blocking client for the external lexical API and the sequential fetch
//! loop that turns the answer pool into a word→definition mapping.

mod client;
mod fetcher;

pub use client::{API_BASE, DictionaryClient, Lookup, LookupError};
pub use fetcher::{DEFAULT_DELAY, FetchReport, fetch_definitions, write_definitions};
