//! Shake effect for rejected words

use std::f64::consts::PI;

/// How long the shake lasts
pub const JIGGLE_DURATION_MS: u64 = 500;

const AMPLITUDE: f64 = 10.0;
const OSCILLATIONS: f64 = 10.0;

/// Decaying horizontal oscillation of the row being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jiggle {
    started_at: u64,
}

impl Jiggle {
    #[must_use]
    pub const fn start(now: u64) -> Self {
        Self { started_at: now }
    }

    /// True once the shake window has elapsed
    #[must_use]
    pub const fn is_expired(&self, now: u64) -> bool {
        now.saturating_sub(self.started_at) > JIGGLE_DURATION_MS
    }

    /// Horizontal offset at `now`, in the range [-10, 10]
    #[must_use]
    pub fn offset(&self, now: u64) -> i32 {
        if self.is_expired(now) {
            return 0;
        }

        let progress = now.saturating_sub(self.started_at) as f64 / JIGGLE_DURATION_MS as f64;
        let decay = 1.0 - progress;
        (AMPLITUDE * decay * (2.0 * OSCILLATIONS * PI * progress).sin()) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        assert_eq!(Jiggle::start(100).offset(100), 0);
    }

    #[test]
    fn swings_both_ways() {
        let jiggle = Jiggle::start(0);
        let offsets: Vec<_> = (0..=JIGGLE_DURATION_MS).map(|t| jiggle.offset(t)).collect();
        assert!(offsets.iter().any(|&o| o > 5));
        assert!(offsets.iter().any(|&o| o < -5));
        assert!(offsets.iter().all(|&o| o.abs() <= 10));
    }

    #[test]
    fn amplitude_decays() {
        let jiggle = Jiggle::start(0);
        let early = (0..100).map(|t| jiggle.offset(t).abs()).max().unwrap();
        let late = (400..500).map(|t| jiggle.offset(t).abs()).max().unwrap();
        assert!(late < early);
    }

    #[test]
    fn expires_after_window() {
        let jiggle = Jiggle::start(1_000);
        assert!(!jiggle.is_expired(1_000 + JIGGLE_DURATION_MS));
        assert!(jiggle.is_expired(1_001 + JIGGLE_DURATION_MS));
        assert_eq!(jiggle.offset(2_000), 0);
    }
}
