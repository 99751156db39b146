//! Word list loading utilities
//!
//! Reads plain-text dictionaries: one word per line, blank lines and
//! `#` comments skipped.

use super::provider::ProviderError;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns `ProviderError::Io` if the file cannot be opened, read, or is
/// not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ProviderError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ProviderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_str(&content))
}

/// Split dictionary text into words
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::words_from_slice;
/// use spelling_bee::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
