//! Timed visual feedback
//!
//! All animations are explicit state machines advanced with a `now` timestamp
//! in milliseconds, taken from an injected [`Clock`]. Nothing here sleeps or
//! polls on its own.

pub mod clock;
mod jiggle;
mod row;
mod tile;

pub use clock::{Clock, ManualClock, SystemClock};
pub use jiggle::{JIGGLE_DURATION_MS, Jiggle};
pub use row::RowReveal;
pub use tile::{REVEAL_DURATION_MS, RevealPhase, TileReveal};

/// Interval between animation ticks (~60 Hz)
pub const FRAME_MS: u64 = 16;
