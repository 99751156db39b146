//! Word list providers
//!
//! The solver only needs one thing from a dictionary: an ordered sequence of
//! candidate words. Providers produce it from a `WordListOptions` value that
//! is passed in explicitly on every call.

use super::embedded::WORDS;
use super::loader::{load_from_file, words_from_slice};
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a word list
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The dictionary file could not be read
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other provider failure
    #[error("word list unavailable: {0}")]
    Unavailable(String),
}

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// Dictionary compiled into the binary
    #[default]
    Embedded,
    /// Plain-text file, one word per line
    File(PathBuf),
}

impl WordSource {
    /// Parse the `--wordlist` argument: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded dictionary"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Options for obtaining a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListOptions {
    pub source: WordSource,
    /// Fold every word to lower case before returning it
    pub lowercase: bool,
    /// Drop repeated words, keeping the first occurrence
    pub dedup: bool,
}

impl Default for WordListOptions {
    fn default() -> Self {
        Self {
            source: WordSource::Embedded,
            lowercase: false,
            dedup: true,
        }
    }
}

impl WordListOptions {
    #[must_use]
    pub fn new(source: WordSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Apply the lowercase and dedup options to a raw list
    #[must_use]
    pub fn post_process(&self, mut words: Vec<String>) -> Vec<String> {
        if self.lowercase {
            for word in &mut words {
                *word = word.to_lowercase();
            }
        }

        if self.dedup {
            let mut seen: FxHashSet<String> = FxHashSet::default();
            words.retain(|word| seen.insert(word.clone()));
        }

        words
    }
}

/// A source of candidate words
pub trait WordListProvider {
    /// Produce the word list described by `options`
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the list cannot be obtained.
    fn word_list(&self, options: &WordListOptions) -> Result<Vec<String>, ProviderError>;
}

/// Closures work as ad-hoc providers
impl<F> WordListProvider for F
where
    F: Fn(&WordListOptions) -> Result<Vec<String>, ProviderError>,
{
    fn word_list(&self, options: &WordListOptions) -> Result<Vec<String>, ProviderError> {
        self(options)
    }
}

/// Default provider: embedded dictionary or a file on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct Dictionary;

impl WordListProvider for Dictionary {
    fn word_list(&self, options: &WordListOptions) -> Result<Vec<String>, ProviderError> {
        info!("loading word list from {}", options.source);

        let words = match &options.source {
            WordSource::Embedded => words_from_slice(WORDS),
            WordSource::File(path) => load_from_file(path)?,
        };
        let loaded = words.len();
        let words = options.post_process(words);

        debug!("loaded {loaded} words, {} after post-processing", words.len());
        Ok(words)
    }
}
