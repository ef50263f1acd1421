//! Word list loading and writing utilities
//!
//! Provides functions to read candidate and allowed lists from files, write
//! the generated artifacts, and convert embedded constants into words.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::Word;

/// Load raw candidate lines from a file
///
/// Lines are returned as-is; normalization and filtering happen in the pool
/// builder so invalid lines are discarded there, not here.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_raw_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content.lines().map(str::to_string).collect())
}

/// Load a pre-existing allowed-word list
///
/// Entries are lowercased and blank lines are skipped. No length validation:
/// inherited allowed words of any length survive.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_allowed_entries<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let entries = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(entries)
}

/// Load answer-pool words from a file
///
/// Returns a vector of valid Word instances, skipping blank and invalid
/// lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordpool::wordlists::loader::load_words;
///
/// let words = load_words("answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Write a newline-delimited list with a single trailing newline
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_lines<P: AsRef<Path>, S: AsRef<str>>(path: P, lines: &[S]) -> io::Result<()> {
    let mut content = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    content.push('\n');

    fs::write(path, content)
}

/// Convert embedded string slice to Word vector
///
/// Entries that do not survive strict validation are skipped.
///
/// # Examples
/// ```
/// use wordpool::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["arise", "civic"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("wordpool-{}-{name}", std::process::id()))
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crate", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crate");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crate", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        // Only "crate" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crate");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn write_lines_single_trailing_newline() {
        let path = temp_path("write-lines.txt");
        write_lines(&path, &["apple", "brisk"]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(content, "apple\nbrisk\n");
    }

    #[test]
    fn write_then_load_words_round_trip() {
        let path = temp_path("round-trip.txt");
        write_lines(&path, &["apple", "brisk", "toast"]).unwrap();

        let words = load_words(&path).unwrap();
        fs::remove_file(&path).ok();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["apple", "brisk", "toast"]);
    }

    #[test]
    fn load_allowed_entries_lowercases_and_skips_blanks() {
        let path = temp_path("allowed.txt");
        fs::write(&path, "ZEBRA\n\n  apple \nQueue\n").unwrap();

        let entries = load_allowed_entries(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(entries, vec!["zebra", "apple", "queue"]);
    }

    #[test]
    fn load_raw_lines_missing_file_is_not_found() {
        let err = load_raw_lines(temp_path("does-not-exist.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
