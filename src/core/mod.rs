//! Core domain types for Spelling Bee
//!
//! This module contains the fundamental domain types and the fixed game rules.
//! Nothing here performs I/O.

mod letters;
mod puzzle;

pub use letters::LetterSet;
pub use puzzle::{Puzzle, PuzzleError};

/// Shortest word the game accepts
pub const MIN_WORD_LENGTH: usize = 4;

/// Points a four-letter word is worth
pub const SHORT_WORD_POINTS: u32 = 1;

/// Extra points for a word that uses every puzzle letter
pub const PANGRAM_BONUS: u32 = 7;
