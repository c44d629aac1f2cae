//! Win/loss tally for the running process

use super::Outcome;
use crate::core::NUM_ATTEMPTS;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: [usize; NUM_ATTEMPTS + 1],
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Record a finished game
    pub fn record(&mut self, outcome: Outcome, attempts: usize) {
        match outcome {
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            Outcome::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
            Outcome::InProgress => {}
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 3);
        stats.record(Outcome::Won, 3);
        stats.record(Outcome::Lost, 6);
        stats.record(Outcome::Won, 6);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[6], 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn in_progress_is_not_recorded() {
        let mut stats = Statistics::default();
        stats.record(Outcome::InProgress, 2);
        assert_eq!(stats, Statistics::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
