//! Spelling Bee solving algorithms
//!
//! Validation, scoring and ranking of candidate words, plus the solver that
//! ties them to a word list provider.

mod engine;
mod ranker;
mod scorer;
mod validator;

pub use engine::{Solver, solve};
pub use ranker::{Ranker, ScoredWord, rank};
pub use scorer::{is_pangram, word_score};
pub use validator::{filter_words, is_valid_word};
