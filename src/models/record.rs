//! Raw rows as they arrive from the record source, before coercion.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// One unvalidated row of the record table.
///
/// Column names follow the source table (`Timestamp`, `Boss`, `Class`,
/// `Player`, `DPS`). Every field tolerates absence here so that the store
/// can report *which* row and field is broken instead of a generic
/// deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,

    #[serde(rename = "Boss", default)]
    pub boss: String,

    #[serde(rename = "Class", default)]
    pub class: Option<String>,

    #[serde(rename = "Player", default)]
    pub player: String,

    #[serde(rename = "DPS", default)]
    pub dps: Option<MetricCell>,
}

impl RawRecord {
    /// Convenience constructor used by tests and in-memory sources.
    pub fn new(
        timestamp: impl Into<String>,
        boss: impl Into<String>,
        class: Option<&str>,
        player: impl Into<String>,
        dps: impl Into<MetricCell>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            boss: boss.into(),
            class: class.map(str::to_string),
            player: player.into(),
            dps: Some(dps.into()),
        }
    }
}

/// A DPS cell: either already numeric (JSON numbers, inferred CSV numbers)
/// or free text that still has to be coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricCell {
    Number(f64),
    Text(String),
}

impl MetricCell {
    /// Coerce to a finite number.
    ///
    /// Blank or non-numeric text, NaN and infinities all coerce to `None`.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            MetricCell::Number(v) => *v,
            MetricCell::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for MetricCell {
    fn from(v: f64) -> Self {
        MetricCell::Number(v)
    }
}

impl From<&str> for MetricCell {
    fn from(s: &str) -> Self {
        MetricCell::Text(s.to_string())
    }
}

struct MetricCellVisitor;

impl<'de> Visitor<'de> for MetricCellVisitor {
    type Value = MetricCell;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(MetricCell::Number(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(MetricCell::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(MetricCell::Number(v as f64))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(MetricCell::Text(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(MetricCell::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(MetricCell::Text(v))
    }
}

impl<'de> Deserialize<'de> for MetricCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MetricCellVisitor)
    }
}
