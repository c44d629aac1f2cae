//! Embedded word list
//!
//! Word list compiled into the binary so the game runs without a data file.

/// CSV with `word` and `occurrence` columns
pub const EMBEDDED_WORDS_CSV: &str = include_str!("../../data/words.csv");
