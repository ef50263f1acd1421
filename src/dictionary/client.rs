//! Lexical API client
//!
//! Thin blocking client for a dictionaryapi.dev-style REST service: one GET
//! per word, typed response payload, and a lookup error that says which way
//! the lookup went wrong instead of swallowing everything.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use ureq::Agent;

/// Default lexical API endpoint
pub const API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

const USER_AGENT: &str = "wordpool/1.0 (+https://github.com/example/wordpool)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Why a single word lookup yielded no definition
///
/// Every variant degrades to an empty definition in the fetch loop; keeping
/// them distinct lets the operator see whether the service was unreachable,
/// refused the word, or simply has no entry for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Transport-level failure: DNS, connect, timeout
    Network(String),
    /// The service answered with a non-success status
    Status(u16),
    /// The body did not decode as the expected payload shape
    Malformed(String),
    /// Well-formed payload with no definition in it
    NoDefinition,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Status(code) => write!(f, "service returned status {code}"),
            Self::Malformed(msg) => write!(f, "malformed payload: {msg}"),
            Self::NoDefinition => write!(f, "no definition in payload"),
        }
    }
}

impl std::error::Error for LookupError {}

/// A source of word definitions
///
/// The fetch loop is generic over this so it can be exercised without a live
/// service.
pub trait Lookup {
    /// Look up the first short definition for a word
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] describing why no definition was obtained.
    fn first_definition(&self, word: &str) -> Result<String, LookupError>;
}

// ── Response payload ──
//
// The service answers with a JSON array of entries, each holding grouped
// meanings with an ordered list of definitions. Only the fields on the
// first-definition path are modeled; everything else is ignored.

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    #[serde(default)]
    definition: String,
}

/// Blocking client for the lexical API
pub struct DictionaryClient {
    agent: Agent,
    base_url: String,
}

impl DictionaryClient {
    /// Create a client for the given API base URL
    ///
    /// The word is appended to the base URL verbatim, so the base must end
    /// with its path separator.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .user_agent(USER_AGENT)
            .build();

        Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.to_string(),
        }
    }
}

impl Lookup for DictionaryClient {
    fn first_definition(&self, word: &str) -> Result<String, LookupError> {
        let url = format!("{}{word}", self.base_url);

        let mut response = self.agent.get(&url).call().map_err(|err| match err {
            ureq::Error::StatusCode(code) => LookupError::Status(code),
            other => LookupError::Network(other.to_string()),
        })?;

        let entries: Vec<Entry> = response
            .body_mut()
            .read_json()
            .map_err(|err| LookupError::Malformed(err.to_string()))?;

        extract_first_definition(&entries).ok_or(LookupError::NoDefinition)
    }
}

/// Extract the first definition of the first meaning of the first entry
///
/// Whitespace is trimmed; a blank definition counts as absent.
fn extract_first_definition(entries: &[Entry]) -> Option<String> {
    let definition = entries
        .first()?
        .meanings
        .first()?
        .definitions
        .first()?
        .definition
        .trim();

    if definition.is_empty() {
        None
    } else {
        Some(definition.to_string())
    }
}
