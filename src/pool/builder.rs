//! Deterministic answer-pool construction
//!
//! Raw candidate lines go through normalize → dedupe → seeded shuffle →
//! fallback fill → truncate. The whole pipeline is a pure function of the
//! input lines and the [`PoolConfig`], so re-running it reproduces the same
//! pool byte for byte.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

use crate::core::Word;
use crate::pool::PoolConfig;

/// Error type for pool construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Candidates plus distinct fallback words cannot reach the target size
    InsufficientWords { needed: usize, reached: usize },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientWords { needed, reached } => write!(
                f,
                "Not enough distinct words to fill the answer pool: need {needed}, only reached {reached}"
            ),
        }
    }
}

impl std::error::Error for PoolError {}

/// Build the answer pool from raw candidate lines
///
/// Invalid lines are silently discarded, duplicates keep their first
/// occurrence, and the surviving candidates are shuffled with a Fisher–Yates
/// permutation driven by [`StdRng`] seeded from `config.seed`. The resulting
/// permutation is stable across runs for a given `rand` version; it is a
/// property of the `StdRng` algorithm, not of the seed alone. Pools shorter
/// than `config.target` are padded from the fallback list, longer ones are
/// truncated.
///
/// # Errors
///
/// Returns [`PoolError::InsufficientWords`] when every distinct fallback
/// word is already in the pool and the target has not been reached.
pub fn build_pool<S: AsRef<str>>(lines: &[S], config: &PoolConfig) -> Result<Vec<Word>, PoolError> {
    let candidates = lines.iter().filter_map(|line| Word::normalize(line.as_ref()));

    let mut pool = dedupe_words(candidates);

    let mut rng = StdRng::seed_from_u64(config.seed);
    pool.shuffle(&mut rng);

    fill_from_fallback(&mut pool, config)?;
    pool.truncate(config.target);

    Ok(pool)
}

/// Retain the first occurrence of each word, preserving relative order
fn dedupe_words(words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut unique = Vec::new();

    for word in words {
        if seen.insert(word.clone()) {
            unique.push(word);
        }
    }

    unique
}

/// Pad the pool from the fallback list until it reaches the target size
///
/// Each pass appends every fallback word not already present, in fallback
/// order. A pass therefore either reaches the target or exhausts the
/// distinct fallback words, so the loop always terminates: the second time
/// the available set comes up empty-handed the fill fails.
fn fill_from_fallback(pool: &mut Vec<Word>, config: &PoolConfig) -> Result<(), PoolError> {
    let mut present: FxHashSet<Word> = pool.iter().cloned().collect();

    while pool.len() < config.target {
        let available: Vec<&Word> = config
            .fallback
            .iter()
            .filter(|word| !present.contains(*word))
            .collect();

        if available.is_empty() {
            return Err(PoolError::InsufficientWords {
                needed: config.target,
                reached: pool.len(),
            });
        }

        for word in available {
            if pool.len() >= config.target {
                break;
            }
            present.insert(word.clone());
            pool.push(word.clone());
        }
    }

    Ok(())
}

/// Merge pre-existing allowed entries with the answer pool
///
/// Existing entries come first and win on order; the pool words follow.
/// Duplicates keep their first occurrence.
#[must_use]
pub fn merge_allowed(existing: &[String], pool: &[Word]) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut merged = Vec::new();

    let entries = existing
        .iter()
        .cloned()
        .chain(pool.iter().map(|word| word.text().to_string()));

    for entry in entries {
        if seen.insert(entry.clone()) {
            merged.push(entry);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn config(seed: u64, target: usize, fallback: &[&str]) -> PoolConfig {
        PoolConfig::new(seed, target, words(fallback))
    }

    #[test]
    fn build_is_deterministic() {
        let lines = ["crate", "brisk", "toast", "apple", "plumb", "fjord"];
        let config = config(42, 10, &["arise", "civic", "baker", "badge", "bloom"]);

        let first = build_pool(&lines, &config).unwrap();
        let second = build_pool(&lines, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_may_reorder() {
        let lines = ["crate", "brisk", "toast", "apple", "plumb", "fjord"];
        let base = config(1, 6, &[]);
        let other = config(2, 6, &[]);

        let first = build_pool(&lines, &base).unwrap();
        let second = build_pool(&lines, &other).unwrap();

        // Same words either way
        let mut sorted_first = first.clone();
        let mut sorted_second = second.clone();
        sorted_first.sort_by(|a, b| a.text().cmp(b.text()));
        sorted_second.sort_by(|a, b| a.text().cmp(b.text()));
        assert_eq!(sorted_first, sorted_second);
    }

    #[test]
    fn pool_has_exact_target_and_no_duplicates() {
        let fallback = [
            "arise", "civic", "baker", "badge", "bloom", "brave", "brain", "bring",
        ];

        for input_size in [0usize, 1, 3, 8, 20] {
            let lines: Vec<String> = (0..input_size)
                .map(|i| format!("w{}{}", (b'a' + (i % 26) as u8) as char, "ord"))
                .collect();
            // 5-letter synthetic words: "waord", "wbord", ...
            let config = config(42, 8, &fallback);

            let pool = build_pool(&lines, &config).unwrap();

            assert_eq!(pool.len(), 8, "input size {input_size}");
            let distinct: FxHashSet<&Word> = pool.iter().collect();
            assert_eq!(distinct.len(), 8, "input size {input_size}");
        }
    }

    #[test]
    fn pool_entries_are_five_lowercase_letters() {
        let lines = ["  CRATE!!", "br-isk", "to4ast", "apple pie"];
        let config = config(42, 3, &["arise", "civic", "baker"]);

        let pool = build_pool(&lines, &config).unwrap();

        for word in &pool {
            assert_eq!(word.text().len(), 5);
            assert!(word.text().chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn duplicate_candidates_keep_first_occurrence() {
        let lines = ["Apple", "apple", "APPLE", "brisk", "toast"];
        let config = config(42, 3, &[]);

        let pool = build_pool(&lines, &config).unwrap();

        assert_eq!(pool.len(), 3);
        let mut texts: Vec<&str> = pool.iter().map(Word::text).collect();
        texts.sort_unstable();
        assert_eq!(texts, vec!["apple", "brisk", "toast"]);
    }

    #[test]
    fn fallback_fills_up_to_target() {
        let lines = ["Apple", "apple", "APPLE", "brisk", "toast"];
        let fallback = ["arise", "civic", "baker", "badge", "bloom", "brave", "brain"];
        let config = config(42, 10, &fallback);

        let pool = build_pool(&lines, &config).unwrap();

        assert_eq!(pool.len(), 10);
        // The three unique candidates are all present
        for text in ["apple", "brisk", "toast"] {
            assert!(pool.iter().any(|w| w.text() == text));
        }
        // The remaining seven came from the fallback list
        let from_fallback = pool
            .iter()
            .filter(|w| fallback.contains(&w.text()))
            .count();
        assert_eq!(from_fallback, 7);
    }

    #[test]
    fn fallback_skips_words_already_in_pool() {
        let lines = ["arise", "civic"];
        let config = config(42, 4, &["arise", "civic", "baker", "badge"]);

        let pool = build_pool(&lines, &config).unwrap();

        assert_eq!(pool.len(), 4);
        let distinct: FxHashSet<&Word> = pool.iter().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn overfull_candidate_set_is_truncated() {
        let lines: Vec<String> = ('a'..='z')
            .flat_map(|c| {
                ["oint", "rint"]
                    .into_iter()
                    .map(move |suffix| format!("{c}{suffix}"))
            })
            .collect();
        let config = config(42, 10, &[]);

        let pool = build_pool(&lines, &config).unwrap();

        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn insufficient_words_is_fatal() {
        let lines = ["apple", "brisk"];
        let config = config(42, 10, &["arise", "civic", "baker"]);

        let err = build_pool(&lines, &config).unwrap_err();

        assert_eq!(
            err,
            PoolError::InsufficientWords {
                needed: 10,
                reached: 5
            }
        );
    }

    #[test]
    fn empty_input_with_empty_fallback_is_fatal() {
        let lines: [&str; 0] = [];
        let config = config(42, 1, &[]);

        assert!(build_pool(&lines, &config).is_err());
    }

    #[test]
    fn empty_input_with_sufficient_fallback_succeeds() {
        let lines: [&str; 0] = [];
        let config = config(42, 3, &["arise", "civic", "baker", "badge"]);

        let pool = build_pool(&lines, &config).unwrap();

        assert_eq!(pool.len(), 3);
        // Fallback order is preserved when there are no candidates to shuffle
        let texts: Vec<&str> = pool.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["arise", "civic", "baker"]);
    }

    #[test]
    fn duplicate_fallback_entries_do_not_duplicate_pool_words() {
        let lines: [&str; 0] = [];
        let config = config(42, 3, &["arise", "arise", "civic", "baker"]);

        let pool = build_pool(&lines, &config).unwrap();

        assert_eq!(pool.len(), 3);
        let distinct: FxHashSet<&Word> = pool.iter().collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn merge_allowed_existing_entries_win_on_order() {
        let existing = vec!["zebra".to_string(), "apple".to_string()];
        let pool = words(&["apple", "brisk"]);

        let merged = merge_allowed(&existing, &pool);

        assert_eq!(merged, vec!["zebra", "apple", "brisk"]);
    }

    #[test]
    fn merge_allowed_is_superset_of_pool() {
        let existing = vec!["zebra".to_string()];
        let pool = words(&["apple", "brisk", "toast"]);

        let merged = merge_allowed(&existing, &pool);

        for word in &pool {
            assert!(merged.iter().any(|entry| entry == word.text()));
        }
    }

    #[test]
    fn merge_allowed_with_no_existing_list() {
        let pool = words(&["apple", "brisk"]);

        let merged = merge_allowed(&[], &pool);

        assert_eq!(merged, vec!["apple", "brisk"]);
    }

    #[test]
    fn merge_allowed_has_no_duplicates() {
        let existing = vec!["apple".to_string(), "apple".to_string()];
        let pool = words(&["apple"]);

        let merged = merge_allowed(&existing, &pool);

        assert_eq!(merged, vec!["apple"]);
    }
}
