use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::ClientResult;
use crate::state::{load_document, persist_document};

/// One successfully ingested source file. `rows` is a point-in-time snapshot
/// taken at ingest and can drift from the ledger after deletes or dedupe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub rows: usize,
    pub date: String,
}

/// Tracks which source file names have been ingested. This is the file-level
/// import gate, distinct from record-level deduplication.
#[derive(Debug)]
pub struct FileRegistry {
    path: PathBuf,
}

impl FileRegistry {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn load(&self) -> ClientResult<Vec<FileRecord>> {
        load_document(&self.path)
    }

    /// Returns false without mutation when `name` is already registered.
    pub fn register(&self, name: &str, rows: usize) -> ClientResult<bool> {
        let mut records = self.load()?;
        if records.iter().any(|record| record.name == name) {
            return Ok(false);
        }

        records.push(FileRecord {
            name: name.to_string(),
            rows,
            date: Local::now().to_rfc3339(),
        });
        persist_document(&self.path, &records)?;
        Ok(true)
    }

    pub fn unregister(&self, name: &str) -> ClientResult<bool> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|record| record.name != name);
        if records.len() == before {
            return Ok(false);
        }

        persist_document(&self.path, &records)?;
        Ok(true)
    }

    pub fn clear(&self) -> ClientResult<()> {
        persist_document::<FileRecord>(&self.path, &[])
    }
}
