//! Dashboard view models.
//!
//! Everything a single boss selection produces, assembled from the pure
//! transforms in [`calculate`](crate::calculate), plus the small text
//! formatting helpers the table renderer needs.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::calculate::{build_leaderboard, select_podium};
use crate::models::{LeaderboardEntry, PodiumEntry, Scope};
use crate::storage::SampleStore;

/// Title of the combined board.
pub const ALL_CLASSES: &str = "All Classes";

/// Appended to a player's name when their best is also their latest result.
pub const NEW_RECORD_MARKER: &str = "🔥 (new!)";

/// One titled leaderboard table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardTable {
    pub title: String,
    /// `None` for the combined board
    pub class: Option<String>,
    pub entries: Vec<LeaderboardEntry>,
}

/// The full dashboard for one boss.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BossBoard {
    pub boss: String,
    pub last_update: Option<NaiveDateTime>,
    pub podium: Vec<PodiumEntry>,
    pub combined: LeaderboardTable,
    pub classes: Vec<LeaderboardTable>,
    /// Sorted distinct players across all tables
    pub player_options: Vec<String>,
}

impl LeaderboardTable {
    /// Rank `scope` and title the table after its class, or
    /// [`ALL_CLASSES`] for the combined board.
    pub fn for_scope(store: &SampleStore, scope: &Scope) -> Self {
        let title = if scope.is_combined() {
            ALL_CLASSES.to_string()
        } else {
            scope.class.clone().unwrap_or_default()
        };
        Self {
            title,
            class: scope.class.clone(),
            entries: build_leaderboard(store, scope),
        }
    }
}

impl BossBoard {
    /// Every table, combined board first.
    pub fn tables(&self) -> impl Iterator<Item = &LeaderboardTable> {
        std::iter::once(&self.combined).chain(self.classes.iter())
    }
}

/// Build the dashboard shown after selecting `boss`.
///
/// Class tables follow the store's sorted class list; classes with no
/// ranked player for this boss are left out.
pub fn boss_board(store: &SampleStore, boss: &str) -> BossBoard {
    let combined = LeaderboardTable::for_scope(store, &Scope::boss(boss));

    let classes: Vec<LeaderboardTable> = store
        .classes()
        .into_iter()
        .map(|class| LeaderboardTable::for_scope(store, &Scope::class(boss, class)))
        .filter(|table| !table.entries.is_empty())
        .collect();

    let player_options: Vec<String> = std::iter::once(&combined)
        .chain(classes.iter())
        .flat_map(|t| t.entries.iter().map(|e| e.player.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    debug!(boss, tables = classes.len() + 1, "Built boss board");

    BossBoard {
        boss: boss.to_string(),
        last_update: store.last_update(boss),
        podium: select_podium(store, boss),
        combined,
        classes,
        player_options,
    }
}

/// Round to a whole number and group thousands with `.`.
pub fn format_dps(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_last_update(ts: &NaiveDateTime) -> String {
    format!("Last update: {}", ts.format("%b %d, %Y – %H:%M"))
}

/// Player label as shown in a table row.
pub fn player_label(entry: &LeaderboardEntry) -> String {
    if entry.is_new_record {
        format!("{} {}", entry.player, NEW_RECORD_MARKER)
    } else {
        entry.player.clone()
    }
}
