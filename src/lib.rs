//! Spelling Bee Solver
//!
//! Finds every dictionary word that can be built from a puzzle's letters and
//! ranks them by the newspaper game's scoring rules.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::LetterSet;
//! use spelling_bee::solver::rank;
//!
//! let required = LetterSet::normalize("f");
//! let extra = LetterSet::normalize("tpayec");
//!
//! let words = ["affectate", "face", "grommet", "catface"];
//! assert_eq!(rank(&words, &required, &extra), ["face", "catface", "affectate"]);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
