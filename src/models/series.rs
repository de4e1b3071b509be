//! Time-series view models for comparison charts.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: NaiveDateTime,
    pub dps: f64,
}

/// Player name → chronologically ordered points, one line per player.
///
/// A `BTreeMap` keeps iteration (and serialized) order stable by name.
pub type ComparisonSeries = BTreeMap<String, Vec<TimeSeriesPoint>>;
