//! JSON file store for check-in records.
//!
//! The store is a plain JSON array of raw records. It only supports
//! load-all and append-then-save: the engine always recomputes from the
//! complete history, so no partial read or in-place update path exists.

use std::path::{Path, PathBuf};

use nocontact_core::RawCheckIn;

/// File-backed check-in history.
#[derive(Debug)]
pub struct CheckInStore {
    path: PathBuf,
    records: Vec<RawCheckIn>,
}

impl CheckInStore {
    /// Open a store, treating a missing file as empty history.
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let records = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        } else {
            Vec::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// The complete history, in insertion order.
    pub fn records(&self) -> &[RawCheckIn] {
        &self.records
    }

    /// Append one record. Not persisted until [`save`](Self::save).
    pub fn append(&mut self, record: RawCheckIn) {
        self.records.push(record);
    }

    /// Write the full history back to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
