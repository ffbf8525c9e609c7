use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::audit::AuditLog;
use crate::commands::common::load_setup;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::AddData;
use crate::ledger::{AmountKind, LedgerStore, TransactionRecord};
use crate::reports::{MONTH_NAMES, month_rank};
use crate::{ClientError, ClientResult};

#[derive(Debug)]
pub struct AddOptions<'a> {
    pub added_by: String,
    pub date: String,
    pub month: String,
    pub account: String,
    pub payment_type: String,
    pub description: String,
    pub reference: String,
    pub kind: AmountKind,
    pub amount: f64,
    pub home_override: Option<&'a Path>,
}

pub fn run(options: AddOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let record = validate(&options)?;

    let setup = load_setup(options.home_override)?;
    let mut store = LedgerStore::load(&setup.ledger_path)?;
    store.append(vec![record.clone()])?;

    let details = format!(
        "{} - {} - {:.2} - by {}",
        options.kind.as_str(),
        record.account,
        options.amount,
        record.added_by
    );
    AuditLog::new(&setup.history_path).record("transaction added", &details)?;

    let data = AddData {
        record,
        ledger_total: store.len(),
        message: format!(
            "Transaction saved ({}: {:.2}).",
            options.kind.as_str(),
            options.amount
        ),
    };

    success("add", data)
}

/// Rejects the entry before anything touches the ledger; no partial record is
/// ever created.
fn validate(options: &AddOptions<'_>) -> ClientResult<TransactionRecord> {
    require_non_empty("added-by", &options.added_by)?;
    require_non_empty("account", &options.account)?;
    require_non_empty("payment-type", &options.payment_type)?;
    require_non_empty("description", &options.description)?;

    let Some(rank) = month_rank(&options.month) else {
        return Err(ClientError::validation_failed(&format!(
            "`{}` is not a valid month name; expected one of January through December.",
            options.month
        )));
    };

    if !options.amount.is_finite() || options.amount <= 0.0 {
        return Err(ClientError::validation_failed(
            "The amount must be a positive number.",
        ));
    }

    let date = NaiveDate::parse_from_str(options.date.trim(), "%Y-%m-%d").map_err(|_| {
        ClientError::validation_failed(&format!(
            "`{}` is not a valid date; expected YYYY-MM-DD.",
            options.date
        ))
    })?;

    let (expense_amount, revenue_amount) = match options.kind {
        AmountKind::Expense => (options.amount, 0.0),
        AmountKind::Revenue => (0.0, options.amount),
    };

    Ok(TransactionRecord {
        date: Some(date),
        month: MONTH_NAMES[rank].to_string(),
        account: options.account.trim().to_string(),
        payment_type: options.payment_type.trim().to_string(),
        description: options.description.trim().to_string(),
        reference: options.reference.trim().to_string(),
        expense_amount,
        revenue_amount,
        added_by: options.added_by.trim().to_string(),
        added_at: Local::now().to_rfc3339(),
        added_manually: true,
    })
}

fn require_non_empty(field: &str, value: &str) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::validation_failed(&format!(
            "The `{field}` field is required and must not be empty."
        )));
    }
    Ok(())
}
