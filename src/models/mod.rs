//! Core data models for siege-board.

mod leaderboard;
mod record;
mod sample;
mod series;

pub use leaderboard::*;
pub use record::*;
pub use sample::*;
pub use series::*;
