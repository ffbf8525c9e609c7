use std::path::Path;

use crate::ClientResult;
use crate::contracts::types::TransactionRow;
use crate::ledger::TransactionRecord;
use crate::setup::{SetupContext, ensure_initialized, ensure_initialized_at};

/// Read-side restriction on which amount side a view includes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Revenue,
    Expense,
}

impl KindFilter {
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            Self::All => true,
            Self::Revenue => record.revenue_amount > 0.0,
            Self::Expense => record.expense_amount > 0.0,
        }
    }
}

pub(crate) fn load_setup(home_override: Option<&Path>) -> ClientResult<SetupContext> {
    match home_override {
        Some(home) => ensure_initialized_at(home),
        None => ensure_initialized(),
    }
}

pub(crate) fn record_to_row(record: &TransactionRecord) -> TransactionRow {
    TransactionRow {
        date: record
            .date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        month: record.month.clone(),
        account: record.account.clone(),
        payment_type: record.payment_type.clone(),
        description: record.description.clone(),
        reference: record.reference.clone(),
        expense: record.expense_amount,
        revenue: record.revenue_amount,
        added_by: record.added_by.clone(),
        added_at: record.added_at.clone(),
    }
}
