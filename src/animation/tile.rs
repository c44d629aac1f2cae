//! Single tile flip animation
//!
//! A tile flips down showing its pre-reveal color, then flips back up showing
//! its classification color.

use crate::core::{LetterResult, LetterState};
use std::f64::consts::PI;

/// How long one tile takes to flip
pub const REVEAL_DURATION_MS: u64 = 500;

/// Letters are hidden while the tile is flatter than this
const GLYPH_MIN_SCALE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Running { started_at: u64 },
    Completed,
}

/// Flip animation for one letter of a submitted guess
#[derive(Debug, Clone, PartialEq)]
pub struct TileReveal {
    result: LetterResult,
    phase: RevealPhase,
    progress: f64,
}

impl TileReveal {
    #[must_use]
    pub const fn new(result: LetterResult) -> Self {
        Self {
            result,
            phase: RevealPhase::Idle,
            progress: 0.0,
        }
    }

    /// Start flipping at `now`. Ignored unless the tile is idle.
    pub fn start(&mut self, now: u64) {
        if self.phase == RevealPhase::Idle {
            self.phase = RevealPhase::Running { started_at: now };
        }
    }

    /// Advance progress to `now`. No-op before `start` and after completion.
    pub fn update(&mut self, now: u64) {
        let RevealPhase::Running { started_at } = self.phase else {
            return;
        };

        let elapsed = now.saturating_sub(started_at);
        self.progress = (elapsed as f64 / REVEAL_DURATION_MS as f64).min(1.0);

        if self.progress >= 1.0 {
            self.phase = RevealPhase::Completed;
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn result(&self) -> LetterResult {
        self.result
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.result.letter
    }

    /// Progress in [0, 1]
    #[inline]
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.phase, RevealPhase::Running { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.phase, RevealPhase::Completed)
    }

    /// Vertical scale of the tile: 1 → 0 over the first half, 0 → 1 over the second
    #[must_use]
    pub fn scale(&self) -> f64 {
        (self.progress * PI).cos().abs()
    }

    /// True once the flip has passed its midpoint and shows the final color
    #[must_use]
    pub fn shows_result(&self) -> bool {
        self.progress >= 0.5
    }

    /// The classification currently visible on the tile
    #[must_use]
    pub fn visible_state(&self) -> LetterState {
        if self.shows_result() {
            self.result.state
        } else {
            LetterState::Unevaluated
        }
    }

    /// False while the tile is too flat to draw its letter
    #[must_use]
    pub fn glyph_visible(&self) -> bool {
        self.scale() > GLYPH_MIN_SCALE
    }
}
