//! Wordle in the terminal
//!
//! Guess a hidden five-letter word in six tries, with per-letter feedback revealed
//! by flipping tiles one at a time.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{Word, evaluate};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let row = evaluate(&guess, &target);
//! assert_eq!(row.to_emoji(), "⬛⬛🟩⬛🟩");
//! ```

// Core domain types
pub mod core;

// Word bank loading
pub mod wordlists;

// Timed reveal and shake animations
pub mod animation;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
