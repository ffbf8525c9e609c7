use std::collections::HashMap;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::ledger::TransactionRecord;
use crate::{ClientError, ClientResult};

/// Label that identifies the header row inside an uploaded table. Real
/// uploads carry banner and title rows above the actual column names.
const DATE_COLUMN_LABEL: &str = "date";

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Parses an uploaded table into validated records.
///
/// Pure transform: scans for the header row, drops empty and dateless rows,
/// and defaults unparsable amounts to 0 and unparsable dates to null rather
/// than failing the file. The only hard failure is a missing header row.
pub(crate) fn parse_table(content: &str, file_name: &str) -> ClientResult<Vec<TransactionRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<StringRecord> = Vec::new();
    for row in reader.records() {
        let record = row.map_err(|error| {
            ClientError::invalid_argument_with_recovery(
                &format!("`{file_name}` is not a readable table: {error}"),
                vec!["Re-export the file as UTF-8 CSV and retry.".to_string()],
            )
        })?;
        rows.push(record);
    }

    let header_index = rows
        .iter()
        .position(|row| row.iter().any(is_date_label))
        .ok_or_else(|| ClientError::header_not_found(file_name))?;

    let columns = column_index(&rows[header_index]);
    let mut records = Vec::new();

    for row in rows.iter().skip(header_index + 1) {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let date_cell = cell(row, &columns, "date");
        if date_cell.is_empty() {
            continue;
        }

        records.push(TransactionRecord {
            date: parse_date(&date_cell),
            month: cell(row, &columns, "month"),
            account: cell(row, &columns, "account"),
            payment_type: cell(row, &columns, "payment_type"),
            description: cell(row, &columns, "description"),
            reference: cell(row, &columns, "reference"),
            expense_amount: parse_amount(&cell(row, &columns, "expense")),
            revenue_amount: parse_amount(&cell(row, &columns, "revenue")),
            added_by: String::new(),
            added_at: String::new(),
            added_manually: false,
        });
    }

    Ok(records)
}

fn is_date_label(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(DATE_COLUMN_LABEL)
}

/// Maps canonical field names to column positions. Header labels are matched
/// after trimming, lowercasing, and collapsing spaces to underscores, so both
/// `payment type` and `Payment Type` resolve to the same column.
fn column_index(header: &StringRecord) -> HashMap<&'static str, usize> {
    let mut columns = HashMap::new();

    for (index, raw_label) in header.iter().enumerate() {
        let label = raw_label.trim().to_lowercase().replace(' ', "_");
        let canonical = match label.as_str() {
            "date" => "date",
            "month" => "month",
            "account" => "account",
            "payment_type" | "type" => "payment_type",
            "description" => "description",
            "reference" => "reference",
            "expense" | "expense_amount" => "expense",
            "revenue" | "revenue_amount" => "revenue",
            _ => continue,
        };
        columns.entry(canonical).or_insert(index);
    }

    columns
}

fn cell(row: &StringRecord, columns: &HashMap<&'static str, usize>, field: &str) -> String {
    columns
        .get(field)
        .and_then(|index| row.get(*index))
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}

/// Explicit per-field coercion: a malformed amount becomes 0 instead of
/// failing the whole import. Non-finite parses ("nan", "inf") count as
/// malformed; serde_json writes them as null, which the next load would
/// reject as corrupt.
fn parse_amount(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    // Timestamps like "2025-01-01 00:00:00" keep their date part.
    let date_part = trimmed.split_whitespace().next().unwrap_or(trimmed);

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}
