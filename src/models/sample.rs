//! Combat-performance sample model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used by the raw record source (e.g. `250614_2130`).
pub const TIMESTAMP_FORMAT: &str = "%y%m%d_%H%M";

/// One player's result for one encounter attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Player name
    pub player: String,

    /// Class the player used for this attempt, if recorded
    pub class: Option<String>,

    /// Boss (encounter) identifier
    pub boss: String,

    /// When the attempt was recorded
    pub timestamp: NaiveDateTime,

    /// Damage per second. `None` when the source value was not numeric;
    /// such samples stay in the store but never take part in rankings,
    /// podiums or time series.
    pub dps: Option<f64>,
}

impl Sample {
    /// Create a new sample with no class and no metric.
    pub fn new(player: impl Into<String>, boss: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            player: player.into(),
            class: None,
            boss: boss.into(),
            timestamp,
            dps: None,
        }
    }

    /// Builder method to set class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Builder method to set DPS.
    pub fn with_dps(mut self, dps: f64) -> Self {
        self.dps = Some(dps);
        self
    }

    /// Whether this sample carries a usable metric.
    pub fn has_metric(&self) -> bool {
        self.dps.is_some()
    }
}

/// Partition key for grouping, ranking and podium operations.
///
/// `class: None` is the combined (all classes) scope for a boss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub boss: String,
    pub class: Option<String>,
}

impl Scope {
    /// Combined scope covering every class for a boss.
    pub fn boss(boss: impl Into<String>) -> Self {
        Self {
            boss: boss.into(),
            class: None,
        }
    }

    /// Per-class scope.
    pub fn class(boss: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            boss: boss.into(),
            class: Some(class.into()),
        }
    }

    /// Whether this is the combined board for its boss.
    pub fn is_combined(&self) -> bool {
        self.class.is_none()
    }

    /// Check whether a sample falls inside this scope.
    pub fn contains(&self, sample: &Sample) -> bool {
        if sample.boss != self.boss {
            return false;
        }
        match &self.class {
            None => true,
            Some(class) => sample.class.as_deref() == Some(class.as_str()),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.class {
            Some(class) => write!(f, "{} / {}", self.boss, class),
            None => write!(f, "{}", self.boss),
        }
    }
}
