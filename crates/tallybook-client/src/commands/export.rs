use std::fs;
use std::path::Path;

use crate::commands::common::load_setup;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ExportData;
use crate::ledger::{LedgerStore, TransactionRecord};
use crate::{ClientError, ClientResult};

/// Human-readable export headers; the normalizer accepts these back, so an
/// exported CSV re-imports unchanged.
const CSV_HEADERS: [&str; 10] = [
    "Date",
    "Month",
    "Account",
    "Payment Type",
    "Description",
    "Reference",
    "Expense",
    "Revenue",
    "Added By",
    "Added At",
];

#[derive(Debug)]
pub struct ExportOptions<'a> {
    pub out: String,
    pub home_override: Option<&'a Path>,
}

pub fn csv(options: ExportOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(options.home_override)?;
    let store = LedgerStore::load(&setup.ledger_path)?;

    let body = render_csv(store.records())?;
    let out_path = Path::new(&options.out);
    fs::write(out_path, body)
        .map_err(|error| ClientError::export_failed(out_path, &error.to_string()))?;

    let data = ExportData {
        format: "csv".to_string(),
        path: options.out,
        rows: store.len(),
    };

    success("export csv", data)
}

/// Symmetric with the persisted ledger document: all fields, dates as plain
/// `YYYY-MM-DD` strings, so a re-import reproduces the records exactly.
pub fn json(options: ExportOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(options.home_override)?;
    let store = LedgerStore::load(&setup.ledger_path)?;

    let body = serde_json::to_string_pretty(store.records())
        .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;
    let out_path = Path::new(&options.out);
    fs::write(out_path, body)
        .map_err(|error| ClientError::export_failed(out_path, &error.to_string()))?;

    let data = ExportData {
        format: "json".to_string(),
        path: options.out,
        rows: store.len(),
    };

    success("export json", data)
}

fn render_csv(records: &[TransactionRecord]) -> ClientResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADERS)
        .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;

    for record in records {
        let date = record
            .date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        writer
            .write_record([
                date.as_str(),
                record.month.as_str(),
                record.account.as_str(),
                record.payment_type.as_str(),
                record.description.as_str(),
                record.reference.as_str(),
                &format!("{:.2}", record.expense_amount),
                &format!("{:.2}", record.revenue_amount),
                record.added_by.as_str(),
                record.added_at.as_str(),
            ])
            .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;
    String::from_utf8(bytes).map_err(|error| ClientError::internal_serialization(&error.to_string()))
}
