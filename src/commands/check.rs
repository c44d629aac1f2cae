//! Check command
//!
//! Evaluates one guess against a chosen target without playing a game.

use crate::core::{GuessRow, Word, WordError, evaluate};
use crate::wordlists::WordBank;

/// Result of checking a guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub row: GuessRow,
    pub in_word_list: bool,
}

/// Evaluate `guess` against `target`
///
/// Neither word has to be in the word bank; membership of the guess is
/// reported in the result.
///
/// # Errors
///
/// Returns `WordError` if either word is not exactly five ASCII letters.
pub fn check_guess(guess: &str, target: &str, bank: &WordBank) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let row = evaluate(&guess, &target);
    let in_word_list = bank.is_valid(guess.text());

    Ok(CheckResult {
        guess,
        target,
        row,
        in_word_list,
    })
}
