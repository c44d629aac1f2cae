//! Guess evaluation and per-letter feedback
//!
//! Each letter of a guess is classified as:
//! - Correct (right letter, right position)
//! - Present (letter is in the target, wrong position)
//! - Absent (no unclaimed copy of the letter is left in the target)
//!
//! Rows that have not been guessed yet hold `Unevaluated` letters.

use super::{GRID_SIZE, Word};

/// Classification of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    #[default]
    Unevaluated,
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unevaluated => '⬜',
        }
    }
}

/// A letter together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    pub letter: char,
    pub state: LetterState,
}

impl LetterResult {
    pub const BLANK: Self = Self {
        letter: ' ',
        state: LetterState::Unevaluated,
    };
}

/// One row of the board: exactly `GRID_SIZE` letter results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRow([LetterResult; GRID_SIZE]);

impl GuessRow {
    /// Row that has not been guessed yet
    pub const EMPTY: Self = Self([LetterResult::BLANK; GRID_SIZE]);

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterResult; GRID_SIZE] {
        &self.0
    }

    /// True once the row holds a submitted guess
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.0
            .iter()
            .all(|result| result.state != LetterState::Unevaluated)
    }

    /// True if every letter is in the correct position
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0
            .iter()
            .all(|result| result.state == LetterState::Correct)
    }

    /// The guessed letters as a string (blanks for an empty row)
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|result| result.letter).collect()
    }

    /// Convert the row to an emoji string such as "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|result| result.state.emoji()).collect()
    }
}

impl Default for GuessRow {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact matches as Correct and remove them from the pool
///    of claimable target letters
/// 2. Second pass, left to right: mark Present while the pool still holds the
///    letter (consuming one copy), otherwise Absent
///
/// A repeated guess letter is therefore credited at most as many times as the
/// target contains it.
///
/// # Examples
/// ```
/// use wordle_tui::core::{LetterState, Word, evaluate};
///
/// let guess = Word::new("erase").unwrap();
/// let target = Word::new("speed").unwrap();
/// let states: Vec<_> = evaluate(&guess, &target)
///     .letters()
///     .iter()
///     .map(|r| r.state)
///     .collect();
///
/// assert_eq!(
///     states,
///     [
///         LetterState::Present,
///         LetterState::Absent,
///         LetterState::Absent,
///         LetterState::Present,
///         LetterState::Present,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> GuessRow {
    let mut states = [LetterState::Unevaluated; GRID_SIZE];
    let mut target_available = target.char_counts();

    // First pass: exact position matches
    for (i, state) in states.iter_mut().enumerate() {
        let letter = guess.char_at(i);
        if letter == target.char_at(i) {
            *state = LetterState::Correct;
            if let Some(count) = target_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: claim remaining copies left to right
    for (i, state) in states.iter_mut().enumerate() {
        if *state == LetterState::Correct {
            continue;
        }
        let letter = guess.char_at(i);
        *state = match target_available.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                LetterState::Present
            }
            _ => LetterState::Absent,
        };
    }

    let mut row = [LetterResult::BLANK; GRID_SIZE];
    for (i, (result, state)) in row.iter_mut().zip(states).enumerate() {
        *result = LetterResult {
            letter: char::from(guess.char_at(i)),
            state,
        };
    }

    GuessRow(row)
}
