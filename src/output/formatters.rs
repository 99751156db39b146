//! Formatting utilities for terminal output

use crate::core::Puzzle;
use crate::solver::ScoredWord;

/// Format one ranked word with its score, right-aligned to `width`
#[must_use]
pub fn format_scored_word(scored: &ScoredWord, width: usize) -> String {
    let marker = if scored.pangram { " *" } else { "" };
    format!("{:>3}  {:<width$}{marker}", scored.score, scored.word)
}

/// Format the puzzle letters, required letters upper-cased
#[must_use]
pub fn format_puzzle(puzzle: &Puzzle) -> String {
    let required: String = puzzle.required().sorted().into_iter().collect();
    let extra: String = puzzle
        .extra()
        .sorted()
        .into_iter()
        .filter(|&c| !puzzle.required().contains(c))
        .collect();
    format!("{} {}", required.to_uppercase(), extra)
}

/// Widest word in a result list, in characters
#[must_use]
pub fn max_word_width(words: &[ScoredWord]) -> usize {
    words
        .iter()
        .map(|w| w.word.chars().count())
        .max()
        .unwrap_or(0)
}
