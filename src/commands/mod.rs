//! Command implementations

pub mod solve;

pub use solve::{SolveConfig, SolveError, SolveResult, solve_puzzle, solve_puzzle_with};
