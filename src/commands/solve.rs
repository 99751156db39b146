//! Puzzle solving command
//!
//! Validates the puzzle letters, solves against the configured word list and
//! collects the totals shown to the user.

use crate::core::{Puzzle, PuzzleError};
use crate::solver::{Ranker, ScoredWord, Solver};
use crate::wordlists::{Dictionary, ProviderError, WordListOptions, WordListProvider};
use thiserror::Error;

/// Failure of the solve command
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub required: String,
    pub extra: String,
    pub word_list: WordListOptions,
    pub parallel: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(required: impl Into<String>, extra: impl Into<String>) -> Self {
        Self {
            required: required.into(),
            extra: extra.into(),
            word_list: WordListOptions::default(),
            parallel: false,
        }
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub puzzle: Puzzle,
    /// Valid words, lowest score first
    pub words: Vec<ScoredWord>,
}

impl SolveResult {
    /// Points for finding every word
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.words.iter().map(|w| w.score).sum()
    }

    #[must_use]
    pub fn pangram_count(&self) -> usize {
        self.words.iter().filter(|w| w.pangram).count()
    }

    #[must_use]
    pub fn pangrams(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| w.pangram)
            .map(|w| w.word.as_str())
            .collect()
    }
}

/// Solve a puzzle against the default dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The required or extra letters are empty
/// - The word list cannot be loaded
pub fn solve_puzzle(config: SolveConfig) -> Result<SolveResult, SolveError> {
    solve_puzzle_with(config, Dictionary)
}

/// Solve a puzzle against any word list provider
///
/// # Errors
///
/// Same as [`solve_puzzle`].
pub fn solve_puzzle_with<P: WordListProvider>(
    config: SolveConfig,
    provider: P,
) -> Result<SolveResult, SolveError> {
    let puzzle = Puzzle::parse(&config.required, &config.extra)?;

    let solver = Solver::new(provider, config.word_list).with_ranker(Ranker::new(config.parallel));
    let words = solver.solve_puzzle(&puzzle)?;

    Ok(SolveResult { puzzle, words })
}
