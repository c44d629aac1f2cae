//! Row reveal sequencing
//!
//! Flips the tiles of a submitted guess one at a time, left to right.

use super::TileReveal;
use crate::core::GuessRow;

#[derive(Debug, Clone, PartialEq)]
pub struct RowReveal {
    row: usize,
    tiles: Vec<TileReveal>,
    cursor: usize,
}

impl RowReveal {
    /// Build the reveal for board row `row` and start its first tile at `now`
    #[must_use]
    pub fn new(row: usize, guess: &GuessRow, now: u64) -> Self {
        let mut tiles: Vec<TileReveal> = guess
            .letters()
            .iter()
            .map(|&result| TileReveal::new(result))
            .collect();

        if let Some(first) = tiles.first_mut() {
            first.start(now);
        }

        Self {
            row,
            tiles,
            cursor: 0,
        }
    }

    /// Advance the active tile; once it completes, start the next one at `now`
    ///
    /// At most one tile completes per call.
    pub fn update(&mut self, now: u64) {
        let Some(active) = self.tiles.get_mut(self.cursor) else {
            return;
        };

        active.update(now);
        if active.is_completed() {
            self.cursor += 1;
            if let Some(next) = self.tiles.get_mut(self.cursor) {
                next.start(now);
            }
        }
    }

    /// True once every tile has finished flipping
    #[inline]
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.cursor >= self.tiles.len()
    }

    /// Board row this reveal belongs to
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[TileReveal] {
        &self.tiles
    }

    /// Number of tiles that have finished flipping
    #[inline]
    #[must_use]
    pub fn completed_tiles(&self) -> usize {
        self.cursor.min(self.tiles.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{REVEAL_DURATION_MS, RevealPhase};
    use crate::core::{Word, evaluate};

    fn reveal(now: u64) -> RowReveal {
        let row = evaluate(&Word::new("erase").unwrap(), &Word::new("speed").unwrap());
        RowReveal::new(2, &row, now)
    }

    #[test]
    fn construction_starts_only_first_tile() {
        let reveal = reveal(100);
        assert_eq!(reveal.row(), 2);
        assert_eq!(reveal.tiles().len(), 5);
        assert_eq!(
            reveal.tiles()[0].phase(),
            RevealPhase::Running { started_at: 100 }
        );
        assert!(
            reveal.tiles()[1..]
                .iter()
                .all(|t| t.phase() == RevealPhase::Idle)
        );
        assert!(!reveal.is_completed());
    }

    #[test]
    fn tiles_never_run_concurrently() {
        let mut reveal = reveal(0);
        let mut now = 0;

        while !reveal.is_completed() {
            now += 16;
            reveal.update(now);

            let running = reveal.tiles().iter().filter(|t| t.is_running()).count();
            assert!(running <= 1, "{running} tiles running at {now}ms");

            // Every tile before a running or completed tile has completed
            for pair in reveal.tiles().windows(2) {
                if pair[1].phase() != RevealPhase::Idle {
                    assert!(pair[0].is_completed());
                }
            }
        }

        assert!(reveal.tiles().iter().all(TileReveal::is_completed));
    }

    #[test]
    fn completes_only_after_every_tile() {
        let mut reveal = reveal(0);
        let mut now = 0;

        for done in 1..=5 {
            now += REVEAL_DURATION_MS;
            reveal.update(now);
            assert_eq!(reveal.completed_tiles(), done);
            assert_eq!(reveal.is_completed(), done == 5);
        }
    }

    #[test]
    fn one_tile_per_update_even_after_long_gap() {
        let mut reveal = reveal(0);
        reveal.update(60_000);
        assert_eq!(reveal.completed_tiles(), 1);
        assert_eq!(
            reveal.tiles()[1].phase(),
            RevealPhase::Running { started_at: 60_000 }
        );
    }

    #[test]
    fn update_after_completion_is_noop() {
        let mut reveal = reveal(0);
        for step in 1..=5 {
            reveal.update(step * REVEAL_DURATION_MS);
        }
        assert!(reveal.is_completed());

        reveal.update(10_000);
        assert!(reveal.is_completed());
        assert_eq!(reveal.completed_tiles(), 5);
    }
}
