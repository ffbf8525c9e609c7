use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ClientResult;
use crate::state::{delete_document, load_document, persist_document};

/// One financial event. `month` is operator-supplied and intentionally
/// independent of `date`: grouping follows what the operator entered, and
/// deriving it from the date would change observable rollups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub date: Option<NaiveDate>,
    pub month: String,
    pub account: String,
    pub payment_type: String,
    pub description: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub expense_amount: f64,
    #[serde(default)]
    pub revenue_amount: f64,
    #[serde(default)]
    pub added_by: String,
    #[serde(default)]
    pub added_at: String,
    #[serde(default)]
    pub added_manually: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AmountKind {
    Revenue,
    Expense,
}

impl AmountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        }
    }

    pub fn amount_of(&self, record: &TransactionRecord) -> f64 {
        match self {
            Self::Revenue => record.revenue_amount,
            Self::Expense => record.expense_amount,
        }
    }
}

/// The full ordered ledger, backed by a whole-file JSON document.
///
/// Every mutation persists the complete collection. A persist failure is
/// returned to the caller but the in-memory mutation is kept, so memory and
/// disk diverge until the next successful write.
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    records: Vec<TransactionRecord>,
}

impl LedgerStore {
    pub fn load(path: &Path) -> ClientResult<Self> {
        let records = load_document(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn append(&mut self, records: Vec<TransactionRecord>) -> ClientResult<()> {
        self.records.extend(records);
        self.persist()
    }

    pub fn remove_where<F>(&mut self, predicate: F) -> ClientResult<usize>
    where
        F: Fn(&TransactionRecord) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|record| !predicate(record));
        let removed = before - self.records.len();
        self.persist()?;
        Ok(removed)
    }

    pub fn replace_all(&mut self, records: Vec<TransactionRecord>) -> ClientResult<()> {
        self.records = records;
        self.persist()
    }

    /// The irreversible delete-all path: removes the persisted document
    /// entirely rather than writing an empty array.
    pub fn clear(&mut self) -> ClientResult<()> {
        self.records.clear();
        delete_document(&self.path)
    }

    fn persist(&self) -> ClientResult<()> {
        persist_document(&self.path, &self.records)
    }
}
