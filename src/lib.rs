//! # Siege Board
//!
//! DPS leaderboards, personal-best detection and comparison series for
//! siege boss attempts.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (samples, scopes, leaderboard rows, series)
//! - **storage**: Record loading and the immutable sample snapshot
//! - **calculate**: Ranking, record detection, podium and time-series transforms
//! - **views**: Dashboard view models and text formatting
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;
pub mod views;

pub use models::*;
pub use storage::{SampleStore, StorageError};
