use std::io;

use serde_json::Value;

use super::format;

pub fn render_import_run(data: &Value) -> io::Result<String> {
    let outcomes = data
        .get("outcomes")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("import output requires outcomes"))?;

    let files_loaded = get_usize(data, "files_loaded");
    let files_failed = get_usize(data, "files_failed");

    let mut lines = Vec::new();
    if files_failed == 0 && files_loaded > 0 {
        lines.push("Import completed successfully.".to_string());
    } else if files_loaded > 0 {
        lines.push("Import completed with some failures.".to_string());
    } else {
        lines.push("Import finished; no new rows were added.".to_string());
    }

    lines.push(String::new());
    lines.push("Files:".to_string());
    for outcome in outcomes {
        lines.push(render_outcome_line(outcome));
        if let Some(detail) = outcome.get("detail").and_then(Value::as_str) {
            lines.push(format!("      {detail}"));
        }
    }

    lines.push(String::new());
    lines.push("Summary:".to_string());
    lines.extend(format::key_value_rows(
        &[
            ("Files loaded:", files_loaded.to_string()),
            ("Files skipped:", get_usize(data, "files_skipped").to_string()),
            ("Files failed:", files_failed.to_string()),
            ("Rows added:", get_usize(data, "rows_added").to_string()),
            ("Ledger total:", get_usize(data, "ledger_total").to_string()),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("Next step:".to_string());
    lines.push("  tallybook summary".to_string());

    Ok(lines.join("\n"))
}

fn render_outcome_line(outcome: &Value) -> String {
    let file = outcome
        .get("file")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let status = outcome
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let rows = get_usize(outcome, "rows");

    match status {
        "loaded" => format!("  [ok]   {file} ({rows} rows)"),
        "skipped" => format!("  [skip] {file}"),
        "failed" => format!("  [fail] {file}"),
        _ => format!("  [?]    {file}"),
    }
}

fn get_usize(value: &Value, key: &str) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or(0)
}
