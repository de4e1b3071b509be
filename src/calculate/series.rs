//! DPS-over-time series for comparison charts.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{ComparisonSeries, Sample, TimeSeriesPoint};
use crate::storage::SampleStore;

/// One series per player for `boss`.
///
/// An empty `players` slice means every player with a sample for the
/// boss; otherwise only the named players that actually have samples get
/// an entry. Samples without DPS leave a gap rather than a point. Points
/// are in ascending timestamp order, equal timestamps in source order.
pub fn extract_series(store: &SampleStore, boss: &str, players: &[String]) -> ComparisonSeries {
    let wanted: HashSet<&str> = players.iter().map(String::as_str).collect();

    let mut series = ComparisonSeries::new();
    for sample in store.samples().iter().filter(|s| s.boss == boss) {
        if !wanted.is_empty() && !wanted.contains(sample.player.as_str()) {
            continue;
        }
        if let Some(point) = point(sample) {
            series
                .entry(sample.player.clone())
                .or_default()
                .push(point);
        }
    }

    for points in series.values_mut() {
        points.sort_by_key(|p| p.timestamp);
    }

    debug!(boss, players = series.len(), "Extracted comparison series");
    series
}

/// The series for a single player, e.g. the row selected on a leaderboard.
pub fn extract_player_series(store: &SampleStore, boss: &str, player: &str) -> Vec<TimeSeriesPoint> {
    let mut points: Vec<TimeSeriesPoint> = store
        .samples()
        .iter()
        .filter(|s| s.boss == boss && s.player == player)
        .filter_map(point)
        .collect();
    points.sort_by_key(|p| p.timestamp);
    points
}

fn point(sample: &Sample) -> Option<TimeSeriesPoint> {
    sample.dps.map(|dps| TimeSeriesPoint {
        timestamp: sample.timestamp,
        dps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::testutil::*;

    fn names(players: &[&str]) -> Vec<String> {
        players.iter().map(|p| p.to_string()).collect()
    }

    fn mixed_store() -> SampleStore {
        let mut other_boss = sample("A", None, Some(999.0), 1);
        other_boss.boss = "Frost Warden".to_string();

        store(vec![
            sample("A", None, Some(150.0), 3),
            sample("B", None, Some(200.0), 1),
            other_boss,
            sample("A", None, Some(100.0), 1),
            sample("C", None, None, 1),
            sample("C", None, Some(80.0), 2),
        ])
    }

    #[test]
    fn test_all_players_when_unfiltered() {
        let series = extract_series(&mixed_store(), BOSS, &[]);

        let players: Vec<&String> = series.keys().collect();
        assert_eq!(players, vec!["A", "B", "C"]);

        let a: Vec<f64> = series["A"].iter().map(|p| p.dps).collect();
        assert_eq!(a, vec![100.0, 150.0]);
    }

    #[test]
    fn test_filter_restricts_to_intersection() {
        let series = extract_series(&mixed_store(), BOSS, &names(&["B", "Nobody"]));

        assert_eq!(series.len(), 1);
        assert!(series.contains_key("B"));
    }

    #[test]
    fn test_missing_metric_is_a_gap() {
        let series = extract_series(&mixed_store(), BOSS, &names(&["C"]));

        assert_eq!(series["C"].len(), 1);
        assert_eq!(series["C"][0].timestamp, at(2, 20));
        assert_eq!(series["C"][0].dps, 80.0);
    }

    #[test]
    fn test_other_bosses_excluded() {
        let series = extract_series(&mixed_store(), BOSS, &names(&["A"]));
        assert!(series["A"].iter().all(|p| p.dps != 999.0));

        let frost = extract_series(&mixed_store(), "Frost Warden", &[]);
        assert_eq!(frost.len(), 1);
        assert_eq!(frost["A"][0].dps, 999.0);
    }

    #[test]
    fn test_points_sorted_by_timestamp() {
        let series = extract_series(&mixed_store(), BOSS, &[]);

        for points in series.values() {
            for pair in points.windows(2) {
                assert!(pair[0].timestamp <= pair[1].timestamp);
            }
        }
    }

    #[test]
    fn test_equal_timestamps_keep_source_order() {
        let mut first = sample("A", None, Some(1.0), 1);
        first.timestamp = at(1, 12);
        let mut second = sample("A", None, Some(2.0), 1);
        second.timestamp = at(1, 12);
        let store = store(vec![first, second]);

        let points = extract_player_series(&store, BOSS, "A");
        let values: Vec<f64> = points.iter().map(|p| p.dps).collect();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_single_player_series() {
        let points = extract_player_series(&mixed_store(), BOSS, "A");

        assert_eq!(
            points,
            vec![
                TimeSeriesPoint {
                    timestamp: at(1, 20),
                    dps: 100.0
                },
                TimeSeriesPoint {
                    timestamp: at(3, 20),
                    dps: 150.0
                },
            ]
        );
        assert!(extract_player_series(&mixed_store(), BOSS, "Nobody").is_empty());
    }

    #[test]
    fn test_single_player_matches_filtered_map() {
        let store = mixed_store();
        let map = extract_series(&store, BOSS, &names(&["A"]));
        assert_eq!(map["A"], extract_player_series(&store, BOSS, "A"));
    }

    #[test]
    fn test_deterministic() {
        let store = mixed_store();
        assert_eq!(
            extract_series(&store, BOSS, &[]),
            extract_series(&store, BOSS, &[])
        );
    }
}
