//! JSONL (JSON Lines) record reader.
//!
//! Each non-blank line is one record object with the same keys as the
//! CSV header. A line that fails to parse fails the whole read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use super::StorageError;
use crate::models::RawRecord;

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Read all entities from the file, stopping at the first bad line.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        let entities = self.iter()?.collect::<Result<Vec<_>, _>>()?;
        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }

    /// Create an iterator over the file.
    pub fn iter(&self) -> Result<JsonlIterator<T>, StorageError> {
        let file = File::open(&self.path)?;

        Ok(JsonlIterator {
            reader: BufReader::new(file),
            line: 0,
            _marker: PhantomData,
        })
    }
}

/// Iterator over JSONL file entries.
pub struct JsonlIterator<T> {
    reader: BufReader<File>,
    line: usize,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> Iterator for JsonlIterator<T> {
    type Item = Result<T, StorageError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = String::new();

        loop {
            buf.clear();
            self.line += 1;
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    if buf.trim().is_empty() {
                        continue;
                    }
                    let line = self.line;
                    return Some(
                        serde_json::from_str(&buf)
                            .map_err(|source| StorageError::Json { line, source }),
                    );
                }
                Err(e) => return Some(Err(StorageError::Io(e))),
            }
        }
    }
}

/// Read raw records from a JSONL file.
pub fn read_jsonl(path: &Path) -> Result<Vec<RawRecord>, StorageError> {
    JsonlReader::<RawRecord>::new(path.to_path_buf()).read_all()
}
