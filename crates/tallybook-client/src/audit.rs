use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::ClientResult;
use crate::state::{delete_document, load_document, persist_document};

/// Newest-first cap applied by insertion order, not timestamp comparison.
pub const HISTORY_CAP: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: String,
    pub action: String,
    pub details: String,
}

/// Append-only operation history, newest first, capped at [`HISTORY_CAP`].
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn record(&self, action: &str, details: &str) -> ClientResult<()> {
        let mut entries = self.load()?;
        entries.insert(
            0,
            AuditEntry {
                timestamp: Local::now().to_rfc3339(),
                action: action.to_string(),
                details: details.to_string(),
            },
        );
        entries.truncate(HISTORY_CAP);
        persist_document(&self.path, &entries)
    }

    pub fn load(&self) -> ClientResult<Vec<AuditEntry>> {
        load_document(&self.path)
    }

    pub fn clear(&self) -> ClientResult<()> {
        persist_document::<AuditEntry>(&self.path, &[])
    }

    /// Removes the persisted log outright; only the purge-all path uses this.
    pub fn delete_file(&self) -> ClientResult<()> {
        delete_document(&self.path)
    }
}
