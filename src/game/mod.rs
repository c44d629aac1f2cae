//! Game state machine
//!
//! `GameSession` owns a single game: the target, the board, the input buffer
//! and the active animations. Views and statistics are derived from it.

mod session;
mod stats;
mod view;

pub use session::{GameSession, Outcome, Phase, SubmitResult};
pub use stats::Statistics;
pub use view::{Banner, RowView, TileView};
