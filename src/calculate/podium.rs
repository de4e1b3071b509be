//! Top-3 podium across all classes.

use tracing::debug;

use super::rank_players;
use crate::models::{Medal, PodiumEntry, Scope};
use crate::storage::SampleStore;

/// Maximum number of podium steps.
pub const PODIUM_SIZE: usize = Medal::ALL.len();

/// Top three distinct players for `boss`, classes merged.
///
/// Uses the same ordering as the combined leaderboard, so the podium is
/// always the first three rows of that board. Fewer players means a
/// shorter podium.
pub fn select_podium(store: &SampleStore, boss: &str) -> Vec<PodiumEntry> {
    let samples = store.query(&Scope::boss(boss));

    let podium: Vec<PodiumEntry> = rank_players(&samples)
        .into_iter()
        .zip(Medal::ALL)
        .map(|(player, medal)| PodiumEntry {
            medal,
            player: player.player.to_string(),
            dps: player.best.dps,
        })
        .collect();

    debug!(boss, steps = podium.len(), "Selected podium");
    podium
}
