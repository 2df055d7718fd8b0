//! JSON-lines flat-file store: one serde-serialized record per line.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{IntakeError, Result};
use crate::record::PersonRecord;

use super::RecordStore;

/// Append-only record file. The parent directory and the file itself are
/// created on first append.
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for JsonlStore {
    fn load_all(&self) -> Result<Vec<PersonRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut records = Vec::new();
        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: PersonRecord = serde_json::from_str(line).map_err(|err| {
                IntakeError::Storage(format!(
                    "Malformed record at {}:{}: {}",
                    self.path.display(),
                    number + 1,
                    err
                ))
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn append(&mut self, record: &PersonRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        file.sync_all()?;
        debug!(id = record.id, path = %self.path.display(), "record appended");
        Ok(())
    }
}
