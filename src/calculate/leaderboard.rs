//! Per-scope leaderboards.

use tracing::debug;

use super::rank_players;
use crate::models::{LeaderboardEntry, Scope};
use crate::storage::SampleStore;

/// Build the leaderboard for `scope`.
///
/// One entry per player with at least one DPS-bearing sample in scope,
/// ranked 1..N by best DPS. Equal DPS is ordered by whichever best
/// sample appears first in the store, so ranks never repeat. An empty
/// scope yields an empty board.
pub fn build_leaderboard(store: &SampleStore, scope: &Scope) -> Vec<LeaderboardEntry> {
    let samples = store.query(scope);

    let entries: Vec<LeaderboardEntry> = rank_players(&samples)
        .iter()
        .zip(1u32..)
        .map(|(player, rank)| LeaderboardEntry {
            rank,
            player: player.player.to_string(),
            class: player.best.sample.class.clone(),
            dps: player.best.dps,
            is_new_record: player.is_new_record(),
        })
        .collect();

    debug!(scope = %scope, samples = samples.len(), entries = entries.len(), "Built leaderboard");
    entries
}
