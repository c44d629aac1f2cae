//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with no terminal or I/O dependencies.
//! Everything here is pure and deterministic.

mod feedback;
mod word;

pub use feedback::{GuessRow, LetterResult, LetterState, evaluate};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const GRID_SIZE: usize = 5;

/// Number of guesses the player gets per game
pub const NUM_ATTEMPTS: usize = 6;
