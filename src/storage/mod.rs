//! Sample loading and the read-only snapshot.
//!
//! - CSV and JSONL record readers
//! - Timestamp / DPS coercion into [`Sample`](crate::models::Sample)
//! - [`SampleStore`], the immutable snapshot every view is computed from

mod csv_file;
mod jsonl;
mod store;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use csv_file::{read_csv, read_csv_from};
pub use jsonl::{read_jsonl, JsonlIterator, JsonlReader};
pub use store::SampleStore;

/// Errors that can occur while loading samples.
///
/// Every variant aborts store construction; a store that loaded
/// successfully never fails a query.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON error on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Row {row}: invalid timestamp {value:?} (expected YYMMDD_HHMM)")]
    InvalidTimestamp {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Row {row}: missing {field}")]
    MissingField { row: usize, field: &'static str },

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Supported record file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Jsonl,
}

impl InputFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(InputFormat::Csv),
            "jsonl" | "ndjson" => Some(InputFormat::Jsonl),
            _ => None,
        }
    }
}
