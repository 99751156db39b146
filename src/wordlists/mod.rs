//! Word lists for Spelling Bee solving
//!
//! Provides an embedded dictionary compiled into the binary, a file loader,
//! and the `WordListProvider` seam the solver pulls candidates through.

mod embedded;
pub mod loader;
mod provider;

pub use embedded::{WORDS, WORDS_COUNT};
pub use provider::{Dictionary, ProviderError, WordListOptions, WordListProvider, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_trimmed_and_non_empty() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim(), "Word '{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn words_are_lowercase() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_is_a_full_word_list() {
        assert!(WORDS_COUNT > 100_000, "only {WORDS_COUNT} words embedded");
        for word in ["optical", "topical", "capitol", "typeface", "effect"] {
            assert!(WORDS.contains(&word), "'{word}' missing from dictionary");
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
