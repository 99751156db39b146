//! Puzzle parameters
//!
//! A puzzle is a required letter set plus an extra letter set. Their union
//! is the alphabet every valid word must stay within.

use super::LetterSet;
use std::fmt;
use thiserror::Error;

/// Rejected puzzle input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("argument required cannot be 0 characters")]
    EmptyRequired,
    #[error("argument extra cannot be 0 characters")]
    EmptyExtra,
}

/// Required and extra letters for one solve
///
/// The two sets are kept independent even when they overlap; only their
/// union is precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    required: LetterSet,
    extra: LetterSet,
    all: LetterSet,
}

impl Puzzle {
    /// Build a puzzle from raw letter strings without any checks
    ///
    /// An empty `required` set places no required-letter constraint on words.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new("F", "tpayec");
    /// assert_eq!(puzzle.all_letters().len(), 7);
    /// assert!(puzzle.required().contains('f'));
    /// ```
    #[must_use]
    pub fn new(required: &str, extra: &str) -> Self {
        Self::from_sets(LetterSet::normalize(required), LetterSet::normalize(extra))
    }

    /// Build a puzzle from already normalized sets
    #[must_use]
    pub fn from_sets(required: LetterSet, extra: LetterSet) -> Self {
        let all = required.union(&extra);
        Self {
            required,
            extra,
            all,
        }
    }

    /// Build a puzzle from user input, rejecting empty letter strings
    ///
    /// # Errors
    /// Returns `PuzzleError::EmptyRequired` or `PuzzleError::EmptyExtra` when
    /// the respective string has no characters.
    pub fn parse(required: &str, extra: &str) -> Result<Self, PuzzleError> {
        if required.is_empty() {
            return Err(PuzzleError::EmptyRequired);
        }
        if extra.is_empty() {
            return Err(PuzzleError::EmptyExtra);
        }
        Ok(Self::new(required, extra))
    }

    #[inline]
    #[must_use]
    pub const fn required(&self) -> &LetterSet {
        &self.required
    }

    #[inline]
    #[must_use]
    pub const fn extra(&self) -> &LetterSet {
        &self.extra
    }

    /// Union of required and extra letters
    #[inline]
    #[must_use]
    pub const fn all_letters(&self) -> &LetterSet {
        &self.all
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] + {}", self.required, self.extra)
    }
}
