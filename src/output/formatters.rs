//! Formatting utilities for terminal output

use crate::core::{GuessRow, LetterResult, LetterState};
use colored::{ColoredString, Colorize};

/// Format one letter as a colored tile like " E "
#[must_use]
pub fn colored_tile(result: LetterResult) -> ColoredString {
    let tile = format!(" {} ", result.letter).white().bold();
    match result.state {
        LetterState::Correct => tile.on_truecolor(88, 163, 81),
        LetterState::Present => tile.on_truecolor(181, 159, 59),
        LetterState::Absent => tile.on_truecolor(58, 58, 60),
        LetterState::Unevaluated => tile.on_truecolor(128, 128, 128),
    }
}

/// Format a whole row as adjacent colored tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.letters()
        .iter()
        .map(|&result| colored_tile(result).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    #[test]
    fn colored_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let row = evaluate(&Word::new("crane").unwrap(), &Word::new("slate").unwrap());
        assert_eq!(colored_row(&row), " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
