//! CSV record table reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::StorageError;
use crate::models::RawRecord;

/// Read every row of a header-bearing CSV file, in file order.
pub fn read_csv(path: &Path) -> Result<Vec<RawRecord>, StorageError> {
    let file = File::open(path)?;
    let records = read_csv_from(file)?;
    debug!("Read {} rows from {:?}", records.len(), path);
    Ok(records)
}

/// Read CSV rows from any reader.
pub fn read_csv_from<R: Read>(input: R) -> Result<Vec<RawRecord>, StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        records.push(row?);
    }
    Ok(records)
}
