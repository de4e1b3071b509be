//! Leaderboard and record calculation engine.
//!
//! Pure transforms over a [`SampleStore`](crate::storage::SampleStore) snapshot:
//! - Per-scope leaderboards with dense ranks
//! - "New personal best" detection
//! - Top-3 podium per boss
//! - Per-player DPS time series
//!
//! Ordering rule shared by every ranking: higher DPS first, and equal DPS
//! falls back to source order (the sample that appears earliest in the
//! store wins). The same rule picks a player's best sample when several
//! of their samples share the maximum.

pub mod leaderboard;
pub mod podium;
pub mod record;
pub mod series;

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::Sample;

pub use leaderboard::build_leaderboard;
pub use podium::{select_podium, PODIUM_SIZE};
pub use record::is_new_record;
pub use series::{extract_player_series, extract_series};

/// A sample with a usable metric and its position among the scope's samples.
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub order: usize,
    pub sample: &'a Sample,
    pub dps: f64,
}

/// One player's valid samples within a scope and the one selected as best.
#[derive(Debug, Clone)]
pub struct PlayerBest<'a> {
    pub player: &'a str,
    pub best: Scored<'a>,
    /// Valid samples in source order, `best` included
    pub history: Vec<Scored<'a>>,
}

impl<'a> PlayerBest<'a> {
    /// Whether the best result is also the player's latest one.
    pub fn is_new_record(&self) -> bool {
        is_new_record(self.history.iter().map(|s| s.sample), self.best.sample)
    }
}

/// Compare two scored samples in ranking order.
pub fn by_rank(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    b.dps
        .total_cmp(&a.dps)
        .then_with(|| a.order.cmp(&b.order))
}

/// Group `samples` (one scope, source order) by player, pick each player's
/// best, and return the players in ranking order.
///
/// Samples without DPS are skipped entirely.
pub fn rank_players<'a>(samples: &[&'a Sample]) -> Vec<PlayerBest<'a>> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut players: Vec<PlayerBest<'a>> = Vec::new();

    for (order, &sample) in samples.iter().enumerate() {
        let Some(dps) = sample.dps else {
            continue;
        };
        let scored = Scored { order, sample, dps };

        match index.get(sample.player.as_str()) {
            Some(&i) => {
                let entry = &mut players[i];
                // Strictly greater: an equal later sample never displaces the earlier one
                if by_rank(&scored, &entry.best) == Ordering::Less {
                    entry.best = scored;
                }
                entry.history.push(scored);
            }
            None => {
                index.insert(sample.player.as_str(), players.len());
                players.push(PlayerBest {
                    player: sample.player.as_str(),
                    best: scored,
                    history: vec![scored],
                });
            }
        }
    }

    players.sort_by(|a, b| by_rank(&a.best, &b.best));
    players
}


#[cfg(test)]
mod tests {
    use super::testutil::*;
    use super::*;

    #[test]
    fn test_rank_players_orders_by_best_dps() {
        let samples = vec![
            sample("A", None, Some(100.0), 1),
            sample("B", None, Some(200.0), 1),
            sample("A", None, Some(150.0), 2),
        ];
        let refs: Vec<&Sample> = samples.iter().collect();

        let ranked = rank_players(&refs);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].player, "B");
        assert_eq!(ranked[1].player, "A");
        assert_eq!(ranked[1].best.dps, 150.0);
        assert_eq!(ranked[1].history.len(), 2);
    }

    #[test]
    fn test_rank_players_best_tie_keeps_earliest_sample() {
        let samples = vec![
            sample("A", Some("Mage"), Some(300.0), 1),
            sample("A", Some("Rogue"), Some(300.0), 2),
        ];
        let refs: Vec<&Sample> = samples.iter().collect();

        let ranked = rank_players(&refs);

        assert_eq!(ranked[0].best.order, 0);
        assert_eq!(ranked[0].best.sample.class.as_deref(), Some("Mage"));
    }

    #[test]
    fn test_rank_players_equal_dps_ranks_by_source_order() {
        let samples = vec![
            sample("Late", None, Some(10.0), 1),
            sample("First", None, Some(500.0), 1),
            sample("Second", None, Some(500.0), 2),
            sample("Late", None, Some(500.0), 3),
        ];
        let refs: Vec<&Sample> = samples.iter().collect();

        let names: Vec<&str> = rank_players(&refs).iter().map(|p| p.player).collect();

        // "Late" reached 500 last, even though its first sample is earliest
        assert_eq!(names, vec!["First", "Second", "Late"]);
    }

    #[test]
    fn test_rank_players_skips_missing_metric() {
        let samples = vec![
            sample("C", None, None, 1),
            sample("D", None, None, 1),
            sample("C", None, Some(80.0), 2),
        ];
        let refs: Vec<&Sample> = samples.iter().collect();

        let ranked = rank_players(&refs);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].player, "C");
        assert_eq!(ranked[0].history.len(), 1);
    }

    #[test]
    fn test_rank_players_empty() {
        assert!(rank_players(&[]).is_empty());
    }
}
