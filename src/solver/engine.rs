//! Main Spelling Bee solver interface

use super::ranker::{Ranker, ScoredWord};
use crate::core::Puzzle;
use crate::wordlists::{Dictionary, ProviderError, WordListOptions, WordListProvider};
use log::debug;

/// Main Spelling Bee solver
///
/// Pulls a fresh word list from its provider on every solve and ranks it
/// against the puzzle. Holds no state between solves.
pub struct Solver<P: WordListProvider> {
    provider: P,
    options: WordListOptions,
    ranker: Ranker,
}

impl<P: WordListProvider> Solver<P> {
    /// Create a new solver over the given provider
    ///
    /// # Parameters
    /// - `provider`: Source of candidate words
    /// - `options`: Passed to the provider on every solve
    pub const fn new(provider: P, options: WordListOptions) -> Self {
        Self {
            provider,
            options,
            ranker: Ranker::sequential(),
        }
    }

    /// Replace the ranker (e.g. to rank in parallel)
    #[must_use]
    pub fn with_ranker(mut self, ranker: Ranker) -> Self {
        self.ranker = ranker;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &WordListOptions {
        &self.options
    }

    /// Solve from raw letter strings
    ///
    /// Returns the valid words ordered by ascending score, ties broken by
    /// the word text. Empty letter strings are not rejected here.
    ///
    /// # Errors
    ///
    /// Returns the provider's error unchanged if the word list cannot be
    /// obtained.
    pub fn solve(&self, required: &str, extra: &str) -> Result<Vec<String>, ProviderError> {
        let puzzle = Puzzle::new(required, extra);
        let ranked = self.solve_puzzle(&puzzle)?;
        Ok(ranked.into_iter().map(|scored| scored.word).collect())
    }

    /// Solve a prepared puzzle, keeping each word's score
    ///
    /// # Errors
    ///
    /// Returns the provider's error unchanged if the word list cannot be
    /// obtained.
    pub fn solve_puzzle(&self, puzzle: &Puzzle) -> Result<Vec<ScoredWord>, ProviderError> {
        let words = self.provider.word_list(&self.options)?;
        debug!("solving {puzzle} against {} words", words.len());

        Ok(self
            .ranker
            .rank_scored(&words, puzzle.required(), puzzle.extra()))
    }
}

/// Solve against the default dictionary
///
/// # Errors
///
/// Returns `ProviderError` if the dictionary cannot be read.
///
/// # Examples
/// ```
/// use spelling_bee::solver::solve;
/// use spelling_bee::wordlists::WordListOptions;
///
/// let words = solve("l", "aciopt", &WordListOptions::default()).unwrap();
/// assert!(words.contains(&"optical".to_string()));
/// ```
pub fn solve(
    required: &str,
    extra: &str,
    options: &WordListOptions,
) -> Result<Vec<String>, ProviderError> {
    Solver::new(Dictionary, options.clone()).solve(required, extra)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_words(_: &WordListOptions) -> Result<Vec<String>, ProviderError> {
        Ok([
            "face", "facet", "effect", "catface", "caffeate", "affectate", "faced", "grommet",
            "clicker",
        ]
        .map(String::from)
        .to_vec())
    }

    fn failing(_: &WordListOptions) -> Result<Vec<String>, ProviderError> {
        Err(ProviderError::Unavailable("offline".to_string()))
    }

    #[test]
    fn solve_ranks_provider_words() {
        let solver = Solver::new(fixed_words, WordListOptions::default());
        let words = solver.solve("f", "tpayec").unwrap();
        assert_eq!(
            words,
            ["face", "facet", "effect", "catface", "caffeate", "affectate"]
        );
    }

    #[test]
    fn solve_ignores_letter_case() {
        let solver = Solver::new(fixed_words, WordListOptions::default());
        assert_eq!(
            solver.solve("F", "TPAYEC").unwrap(),
            solver.solve("f", "tpayec").unwrap()
        );
    }

    #[test]
    fn solve_puzzle_keeps_scores() {
        let solver = Solver::new(fixed_words, WordListOptions::default());
        let ranked = solver.solve_puzzle(&Puzzle::new("f", "tpayec")).unwrap();
        assert_eq!(ranked.last().map(|s| s.score), Some(9));
    }

    #[test]
    fn provider_failure_propagates() {
        let solver = Solver::new(failing, WordListOptions::default());
        let err = solver.solve("f", "tpayec").unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable(ref msg) if msg == "offline"));
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let solver = Solver::new(fixed_words, WordListOptions::default());
        assert!(solver.solve("z", "qx").unwrap().is_empty());
    }

    #[test]
    fn parallel_ranker_gives_same_result() {
        let sequential = Solver::new(fixed_words, WordListOptions::default());
        let parallel =
            Solver::new(fixed_words, WordListOptions::default()).with_ranker(Ranker::parallel());
        assert_eq!(
            parallel.solve("f", "tpayec").unwrap(),
            sequential.solve("f", "tpayec").unwrap()
        );
    }

    #[test]
    fn options_reach_the_provider() {
        let provider = |options: &WordListOptions| -> Result<Vec<String>, ProviderError> {
            Ok(options.post_process(vec!["FACE".to_string(), "face".to_string()]))
        };
        let options = WordListOptions {
            lowercase: true,
            ..WordListOptions::default()
        };
        let solver = Solver::new(provider, options);
        assert_eq!(solver.solve("f", "ace").unwrap(), ["face"]);
        assert!(solver.options().lowercase);
    }

    #[test]
    fn solve_with_embedded_dictionary() {
        let words = solve("l", "aciopt", &WordListOptions::default()).unwrap();

        for pangram in ["optical", "topical", "capitol"] {
            assert!(words.iter().any(|w| w == pangram), "missing {pangram}");
        }
        assert!(words.len() > 20, "only {} words found", words.len());
        assert!(words.iter().all(|w| w.contains('l')));

        // Ten letters plus the pangram bonus is the top score
        assert_eq!(words.last().map(String::as_str), Some("apolitical"));
    }
}
