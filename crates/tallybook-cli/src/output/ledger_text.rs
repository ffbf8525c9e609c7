use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

const ROW_COLUMNS: [Column<'static>; 7] = [
    Column {
        name: "Date",
        align: Align::Left,
    },
    Column {
        name: "Month",
        align: Align::Left,
    },
    Column {
        name: "Account",
        align: Align::Left,
    },
    Column {
        name: "Payment",
        align: Align::Left,
    },
    Column {
        name: "Description",
        align: Align::Left,
    },
    Column {
        name: "Expense",
        align: Align::Right,
    },
    Column {
        name: "Revenue",
        align: Align::Right,
    },
];

pub fn render_add(data: &Value) -> io::Result<String> {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("add output requires message"))?;
    let ledger_total = data
        .get("ledger_total")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let record = data.get("record").cloned().unwrap_or(Value::Null);

    let mut lines = vec![message.to_string(), String::new(), "Recorded:".to_string()];
    lines.extend(format::key_value_rows(
        &[
            ("Date:", field_str(&record, "date")),
            ("Month:", field_str(&record, "month")),
            ("Account:", field_str(&record, "account")),
            ("Payment:", field_str(&record, "paymentType")),
            ("Description:", field_str(&record, "description")),
            (
                "Expense:",
                format::format_amount(field_f64(&record, "expenseAmount")),
            ),
            (
                "Revenue:",
                format::format_amount(field_f64(&record, "revenueAmount")),
            ),
            ("Added by:", field_str(&record, "addedBy")),
        ],
        2,
    ));
    lines.push(String::new());
    lines.push(format!("Ledger total: {ledger_total} rows"));

    Ok(lines.join("\n"))
}

pub fn render_list(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("list output requires rows"))?;
    let ledger_total = data
        .get("ledger_total")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    if rows.is_empty() {
        if ledger_total == 0 {
            return Ok([
                "The ledger is empty.",
                "",
                "Bring in some data:",
                "  tallybook import <path>",
                "  tallybook add --help",
            ]
            .join("\n"));
        }
        return Ok(format!(
            "No rows matched the filters. The ledger holds {ledger_total} rows in total."
        ));
    }

    let count_label = if rows.len() == 1 {
        "1 row".to_string()
    } else {
        format!("{} rows", rows.len())
    };

    let mut lines = vec![
        format!("{count_label} (of {ledger_total} in the ledger)."),
        String::new(),
    ];
    lines.extend(format::render_table(&ROW_COLUMNS, &transaction_rows(rows)));

    Ok(lines.join("\n"))
}

pub fn render_dedupe_find(data: &Value) -> io::Result<String> {
    let total = data.get("total").and_then(Value::as_u64).unwrap_or(0);
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("dedupe find output requires rows"))?;

    if rows.is_empty() {
        return Ok("No duplicate rows found.".to_string());
    }

    let mut lines = vec![
        format!("{total} rows share a (date, account, expense, revenue) key with another row."),
        String::new(),
    ];
    lines.extend(format::render_table(&ROW_COLUMNS, &transaction_rows(rows)));
    lines.push(String::new());
    lines.push("Run `tallybook dedupe remove` to keep one copy per group.".to_string());

    Ok(lines.join("\n"))
}

pub fn render_dedupe_remove(data: &Value) -> io::Result<String> {
    let removed = data.get("removed").and_then(Value::as_u64).unwrap_or(0);
    let remaining = data.get("remaining").and_then(Value::as_u64).unwrap_or(0);

    if removed == 0 {
        return Ok(format!(
            "No duplicate rows found. The ledger still holds {remaining} rows."
        ));
    }

    Ok(format!(
        "Removed {removed} duplicate rows. The ledger now holds {remaining} rows."
    ))
}

pub fn render_purge(command: &str, data: &Value) -> io::Result<String> {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("purge output requires message"))?;
    let removed = data.get("removed").and_then(Value::as_u64).unwrap_or(0);
    let remaining = data.get("remaining").and_then(Value::as_u64).unwrap_or(0);

    let mut lines = vec![message.to_string()];
    if command == "purge manual" {
        lines.push(format!(
            "Removed {removed} rows; {remaining} imported rows remain."
        ));
    } else {
        lines.push(format!("Removed {removed} rows."));
        lines.push("The operation history was deleted as well.".to_string());
    }

    Ok(lines.join("\n"))
}

fn transaction_rows(rows: &[Value]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                field_str(row, "date"),
                field_str(row, "month"),
                field_str(row, "account"),
                field_str(row, "payment_type"),
                field_str(row, "description"),
                format::format_amount(field_f64(row, "expense")),
                format::format_amount(field_f64(row, "revenue")),
            ]
        })
        .collect()
}

fn field_str(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn field_f64(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_add, render_dedupe_find, render_dedupe_remove, render_list, render_purge};

    fn sample_row() -> serde_json::Value {
        json!({
            "date": "2025-01-15",
            "month": "January",
            "account": "Sales",
            "payment_type": "cash",
            "description": "walk-in",
            "reference": "",
            "expense": 0.0,
            "revenue": 1200.0,
            "added_by": "",
            "added_at": ""
        })
    }

    #[test]
    fn empty_ledger_list_guides_user() {
        let payload = json!({ "count": 0, "ledger_total": 0, "rows": [] });
        let rendered = render_list(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("The ledger is empty."));
            assert!(text.contains("tallybook import <path>"));
        }
    }

    #[test]
    fn filtered_out_list_reports_ledger_total() {
        let payload = json!({ "count": 0, "ledger_total": 7, "rows": [] });
        let rendered = render_list(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("No rows matched"));
            assert!(text.contains("7 rows"));
        }
    }

    #[test]
    fn list_renders_amounts_with_grouping() {
        let payload = json!({ "count": 1, "ledger_total": 1, "rows": [sample_row()] });
        let rendered = render_list(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("1 row (of 1 in the ledger)."));
            assert!(text.contains("Sales"));
            assert!(text.contains("1,200.00"));
        }
    }

    #[test]
    fn add_renders_recorded_entry() {
        let payload = json!({
            "record": {
                "date": "2025-01-15",
                "month": "January",
                "account": "Sales",
                "paymentType": "cash",
                "description": "walk-in",
                "reference": "",
                "expenseAmount": 0.0,
                "revenueAmount": 120.5,
                "addedBy": "sara",
                "addedAt": "2025-01-15T10:00:00+00:00",
                "addedManually": true
            },
            "ledger_total": 4,
            "message": "Transaction recorded."
        });

        let rendered = render_add(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Transaction recorded."));
            assert!(text.contains("January"));
            assert!(text.contains("120.50"));
            assert!(text.contains("Ledger total: 4 rows"));
        }
    }

    #[test]
    fn dedupe_find_empty_and_populated_states() {
        let empty = render_dedupe_find(&json!({ "total": 0, "rows": [] }));
        assert!(empty.is_ok());
        if let Ok(text) = empty {
            assert_eq!(text, "No duplicate rows found.");
        }

        let found = render_dedupe_find(&json!({ "total": 2, "rows": [sample_row(), sample_row()] }));
        assert!(found.is_ok());
        if let Ok(text) = found {
            assert!(text.starts_with("2 rows share a (date, account, expense, revenue) key"));
            assert!(text.contains("tallybook dedupe remove"));
        }
    }

    #[test]
    fn dedupe_remove_reports_both_outcomes() {
        let removed = render_dedupe_remove(&json!({ "removed": 2, "remaining": 5 }));
        assert!(removed.is_ok());
        if let Ok(text) = removed {
            assert_eq!(text, "Removed 2 duplicate rows. The ledger now holds 5 rows.");
        }

        let none = render_dedupe_remove(&json!({ "removed": 0, "remaining": 5 }));
        assert!(none.is_ok());
        if let Ok(text) = none {
            assert!(text.starts_with("No duplicate rows found."));
        }
    }

    #[test]
    fn purge_all_mentions_history_deletion() {
        let payload = json!({
            "removed": 9,
            "remaining": 0,
            "message": "Ledger deleted."
        });
        let rendered = render_purge("purge all", &payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("operation history was deleted"));
        }

        let manual = render_purge(
            "purge manual",
            &json!({"removed": 2, "remaining": 7, "message": "Manual entries deleted."}),
        );
        assert!(manual.is_ok());
        if let Ok(text) = manual {
            assert!(text.contains("2 rows"));
            assert!(text.contains("7 imported rows remain"));
        }
    }
}
