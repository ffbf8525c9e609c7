use serde::Serialize;

use crate::audit::AuditEntry;
use crate::ledger::TransactionRecord;
use crate::registry::FileRecord;
use crate::reports::{CategoryTotal, MonthlyRollup, SummaryStats};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcomeStatus {
    Loaded,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub file: String,
    pub status: FileOutcomeStatus,
    pub rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FileOutcome {
    pub fn loaded(file: &str, rows: usize) -> Self {
        Self {
            file: file.to_string(),
            status: FileOutcomeStatus::Loaded,
            rows,
            detail: None,
        }
    }

    pub fn skipped(file: &str) -> Self {
        Self {
            file: file.to_string(),
            status: FileOutcomeStatus::Skipped,
            rows: 0,
            detail: Some("File name is already registered; not imported again.".to_string()),
        }
    }

    pub fn failed(file: &str, detail: &str) -> Self {
        Self {
            file: file.to_string(),
            status: FileOutcomeStatus::Failed,
            rows: 0,
            detail: Some(detail.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportData {
    pub outcomes: Vec<FileOutcome>,
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub rows_added: usize,
    pub ledger_total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddData {
    pub record: TransactionRecord,
    pub ledger_total: usize,
    pub message: String,
}

/// Display row: the ledger record with its date flattened to a plain string
/// (empty for null dates).
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub month: String,
    pub account: String,
    pub payment_type: String,
    pub description: String,
    pub reference: String,
    pub expense: f64,
    pub revenue: f64,
    pub added_by: String,
    pub added_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListData {
    pub count: usize,
    pub ledger_total: usize,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub stats: SummaryStats,
    pub monthly: Vec<MonthlyRollup>,
    pub top_expense_categories: Vec<CategoryTotal>,
    pub top_revenue_categories: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DedupeFindData {
    pub total: usize,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DedupeRemoveData {
    pub removed: usize,
    pub remaining: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryData {
    pub total: usize,
    pub entries: Vec<AuditEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryClearData {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilesData {
    pub total_files: usize,
    pub total_rows: usize,
    pub files: Vec<FileRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileRemoveData {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilesResetData {
    pub files_cleared: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub format: String,
    pub path: String,
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PurgeData {
    pub removed: usize,
    pub remaining: usize,
    pub message: String,
}
