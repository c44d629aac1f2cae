//! Read-only board snapshot for renderers
//!
//! Renderers never look at the session's internals; they draw whatever
//! [`GameSession::board`] and [`GameSession::banner`] report for the current tick.

use super::{GameSession, Outcome, Phase};
use crate::animation::{Clock, RevealPhase, TileReveal};
use crate::core::{GRID_SIZE, LetterResult, LetterState, NUM_ATTEMPTS};
use rand::Rng;

/// What a single board cell shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileView {
    /// Nothing typed yet
    Empty,
    /// A letter that has not been evaluated (typed, or waiting to flip)
    Pending(char),
    /// Mid-flip
    Flipping {
        letter: char,
        /// Classification currently shown (`Unevaluated` before the midpoint)
        state: LetterState,
        /// Vertical scale in [0, 1]
        scale: f64,
        glyph_visible: bool,
    },
    /// Flip finished, or the row was evaluated before this reveal
    Settled(LetterResult),
}

impl From<&TileReveal> for TileView {
    fn from(tile: &TileReveal) -> Self {
        match tile.phase() {
            RevealPhase::Idle => Self::Pending(tile.letter()),
            RevealPhase::Running { .. } => Self::Flipping {
                letter: tile.letter(),
                state: tile.visible_state(),
                scale: tile.scale(),
                glyph_visible: tile.glyph_visible(),
            },
            RevealPhase::Completed => Self::Settled(tile.result()),
        }
    }
}

/// One board row and its horizontal shake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowView {
    pub tiles: [TileView; GRID_SIZE],
    pub offset: i32,
}

impl RowView {
    const EMPTY: Self = Self {
        tiles: [TileView::Empty; GRID_SIZE],
        offset: 0,
    };
}

/// End-of-game message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Won { attempts: usize },
    Lost { target: String },
}

impl<C: Clock, R: Rng> GameSession<'_, C, R> {
    /// Snapshot of every board row
    #[must_use]
    pub fn board(&self) -> [RowView; NUM_ATTEMPTS] {
        let mut board = [RowView::EMPTY; NUM_ATTEMPTS];
        let attempt = self.attempt();

        for (index, (view, row)) in board.iter_mut().zip(self.rows()).enumerate() {
            if index < attempt {
                match self.reveal() {
                    Some(reveal) if reveal.row() == index => {
                        for (tile_view, tile) in view.tiles.iter_mut().zip(reveal.tiles()) {
                            *tile_view = TileView::from(tile);
                        }
                    }
                    _ => {
                        for (tile_view, &result) in view.tiles.iter_mut().zip(row.letters()) {
                            *tile_view = TileView::Settled(result);
                        }
                    }
                }
            } else if index == attempt && !self.outcome().is_decided() {
                for (tile_view, letter) in view.tiles.iter_mut().zip(self.input().chars()) {
                    *tile_view = TileView::Pending(letter);
                }
                view.offset = self.jiggle_offset();
            }
        }

        board
    }

    /// Message to show once the game is over
    #[must_use]
    pub fn banner(&self) -> Option<Banner> {
        if self.phase() != Phase::Over {
            return None;
        }

        match self.outcome() {
            Outcome::Won => Some(Banner::Won {
                attempts: self.attempt(),
            }),
            Outcome::Lost => Some(Banner::Lost {
                target: self.target().text().to_string(),
            }),
            Outcome::InProgress => None,
        }
    }

    /// True when a "play again" control should be offered
    #[must_use]
    pub fn shows_restart(&self) -> bool {
        self.phase() == Phase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{JIGGLE_DURATION_MS, ManualClock, REVEAL_DURATION_MS};
    use crate::core::Word;
    use crate::wordlists::WordBank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> WordBank {
        WordBank::from_reader("word,occurrence\nspeed,1\ncrane,1\n".as_bytes(), 0.0).unwrap()
    }

    fn session<'a>(bank: &'a WordBank, clock: &ManualClock) -> GameSession<'a, ManualClock> {
        GameSession::with_target(
            bank,
            clock.clone(),
            StdRng::seed_from_u64(0),
            Word::new("speed").unwrap(),
        )
    }

    fn submit(session: &mut GameSession<'_, ManualClock>, word: &str) {
        for ch in word.chars() {
            session.append_letter(ch);
        }
        session.submit_guess();
    }

    #[test]
    fn fresh_board_is_empty() {
        let bank = bank();
        let clock = ManualClock::new();
        let session = session(&bank, &clock);

        let board = session.board();
        assert!(board.iter().all(|row| row.tiles == [TileView::Empty; GRID_SIZE]));
        assert!(session.banner().is_none());
        assert!(!session.shows_restart());
    }

    #[test]
    fn typed_letters_appear_on_current_row() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut session = session(&bank, &clock);
        session.append_letter('c');
        session.append_letter('r');

        let row = session.board()[0];
        assert_eq!(row.tiles[0], TileView::Pending('C'));
        assert_eq!(row.tiles[1], TileView::Pending('R'));
        assert_eq!(row.tiles[2], TileView::Empty);
    }

    #[test]
    fn revealing_row_flips_left_to_right() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut session = session(&bank, &clock);
        submit(&mut session, "crane");

        clock.advance(100);
        session.tick();
        let row = session.board()[0];
        assert!(matches!(
            row.tiles[0],
            TileView::Flipping {
                letter: 'C',
                state: LetterState::Unevaluated,
                ..
            }
        ));
        assert_eq!(row.tiles[1], TileView::Pending('R'));

        clock.advance(REVEAL_DURATION_MS);
        session.tick();
        let row = session.board()[0];
        assert_eq!(
            row.tiles[0],
            TileView::Settled(LetterResult {
                letter: 'C',
                state: LetterState::Absent
            })
        );
        assert!(matches!(row.tiles[1], TileView::Flipping { letter: 'R', .. }));
    }

    #[test]
    fn input_row_carries_jiggle() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut session = session(&bank, &clock);
        submit(&mut session, "zzzzz");

        clock.advance(12);
        let board = session.board();
        assert_ne!(board[0].offset, 0);
        assert_eq!(board[1].offset, 0);

        clock.advance(JIGGLE_DURATION_MS);
        assert_eq!(session.board()[0].offset, 0);
    }

    #[test]
    fn banner_waits_for_reveal() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut session = session(&bank, &clock);
        submit(&mut session, "speed");

        assert!(session.banner().is_none());
        for _ in 0..5 {
            clock.advance(REVEAL_DURATION_MS);
            session.tick();
        }

        assert_eq!(session.banner(), Some(Banner::Won { attempts: 1 }));
        assert!(session.shows_restart());
        assert!(session.board()[0].tiles.iter().all(|tile| matches!(
            tile,
            TileView::Settled(LetterResult {
                state: LetterState::Correct,
                ..
            })
        )));
    }

    #[test]
    fn lost_banner_names_target() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut session = session(&bank, &clock);

        for _ in 0..NUM_ATTEMPTS {
            submit(&mut session, "crane");
            for _ in 0..5 {
                clock.advance(REVEAL_DURATION_MS);
                session.tick();
            }
        }

        assert_eq!(
            session.banner(),
            Some(Banner::Lost {
                target: "SPEED".to_string()
            })
        );
    }
}
