//! The immutable sample snapshot.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use super::{read_csv, read_jsonl, InputFormat, StorageError};
use crate::models::{MetricCell, RawRecord, Sample, Scope, TIMESTAMP_FORMAT};

/// Every sample for the session, in source order.
///
/// Built once at startup and never mutated afterwards, so a shared
/// reference can be queried from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    samples: Vec<Sample>,
}

impl SampleStore {
    /// Build a store from already-parsed samples.
    ///
    /// A non-finite DPS is dropped to `None`, the same policy `load` applies.
    pub fn new(mut samples: Vec<Sample>) -> Self {
        for sample in &mut samples {
            sample.dps = sample.dps.and_then(finite);
        }
        Self { samples }
    }

    /// Open a record file, choosing the reader from its extension.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let records = match InputFormat::from_path(path) {
            Some(InputFormat::Csv) => read_csv(path)?,
            Some(InputFormat::Jsonl) => read_jsonl(path)?,
            None => return Err(StorageError::UnsupportedFormat(path.to_path_buf())),
        };
        let store = Self::load(records)?;
        info!(
            "Loaded {} samples from {:?} ({} without DPS)",
            store.len(),
            path,
            store.missing_metric_count()
        );
        Ok(store)
    }

    /// Coerce raw rows into samples.
    ///
    /// A bad timestamp or a blank boss/player aborts the load. A DPS value
    /// that is not a finite number is kept as `None`.
    pub fn load<I>(records: I) -> Result<Self, StorageError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut samples = Vec::new();

        for (idx, record) in records.into_iter().enumerate() {
            let row = idx + 1;
            samples.push(coerce(row, record)?);
        }

        Ok(Self { samples })
    }

    /// All samples in source order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples whose DPS could not be coerced.
    pub fn missing_metric_count(&self) -> usize {
        self.samples.iter().filter(|s| !s.has_metric()).count()
    }

    /// Samples inside `scope`, in source order.
    pub fn query(&self, scope: &Scope) -> Vec<&Sample> {
        self.samples.iter().filter(|s| scope.contains(s)).collect()
    }

    /// Sorted distinct boss names.
    pub fn bosses(&self) -> Vec<String> {
        sorted_distinct(self.samples.iter().map(|s| s.boss.as_str()))
    }

    /// Sorted distinct classes across the whole store.
    pub fn classes(&self) -> Vec<String> {
        sorted_distinct(self.samples.iter().filter_map(|s| s.class.as_deref()))
    }

    /// Sorted distinct players with at least one sample for `boss`.
    pub fn players(&self, boss: &str) -> Vec<String> {
        sorted_distinct(
            self.samples
                .iter()
                .filter(|s| s.boss == boss)
                .map(|s| s.player.as_str()),
        )
    }

    /// Latest timestamp recorded for `boss`, metric or not.
    pub fn last_update(&self, boss: &str) -> Option<NaiveDateTime> {
        self.samples
            .iter()
            .filter(|s| s.boss == boss)
            .map(|s| s.timestamp)
            .max()
    }
}

fn coerce(row: usize, record: RawRecord) -> Result<Sample, StorageError> {
    let raw_ts = record.timestamp.trim();
    let timestamp = NaiveDateTime::parse_from_str(raw_ts, TIMESTAMP_FORMAT).map_err(|source| {
        StorageError::InvalidTimestamp {
            row,
            value: raw_ts.to_string(),
            source,
        }
    })?;

    let boss = required(row, "Boss", &record.boss)?;
    let player = required(row, "Player", &record.player)?;

    let class = record
        .class
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    let dps = record.dps.as_ref().and_then(MetricCell::value).and_then(finite);
    if dps.is_none() {
        debug!(row, player = %player, "DPS is not numeric, excluding from rankings");
    }

    Ok(Sample {
        player,
        class,
        boss,
        timestamp,
        dps,
    })
}

/// Finite values only, with `-0.0` folded into `0.0`.
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value + 0.0)
}

fn required(row: usize, field: &'static str, value: &str) -> Result<String, StorageError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StorageError::MissingField { row, field });
    }
    Ok(value.to_string())
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
