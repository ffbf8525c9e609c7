use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_files_list(data: &Value) -> io::Result<String> {
    let files = data
        .get("files")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("files list output requires files"))?;

    if files.is_empty() {
        return Ok([
            "No files have been imported yet.",
            "",
            "Run `tallybook import <path>` to load a spreadsheet export.",
        ]
        .join("\n"));
    }

    let total_files = data.get("total_files").and_then(Value::as_u64).unwrap_or(0);
    let total_rows = data.get("total_rows").and_then(Value::as_u64).unwrap_or(0);

    let columns = [
        Column {
            name: "File",
            align: Align::Left,
        },
        Column {
            name: "Rows",
            align: Align::Right,
        },
        Column {
            name: "Imported",
            align: Align::Left,
        },
    ];

    let rows = files
        .iter()
        .map(|file| {
            vec![
                file.get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
                file.get("rows")
                    .and_then(Value::as_u64)
                    .unwrap_or(0)
                    .to_string(),
                file.get("date")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec![
        format!("{total_files} files registered, {total_rows} rows at import time."),
        String::new(),
    ];
    lines.extend(format::render_table(&columns, &rows));

    Ok(lines.join("\n"))
}

pub fn render_file_remove(data: &Value) -> io::Result<String> {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("files remove output requires message"))?;
    let name = data.get("name").and_then(Value::as_str).unwrap_or("");

    Ok([
        message.to_string(),
        format!("Run `tallybook import {name}` to load it again."),
    ]
    .join("\n"))
}

pub fn render_files_reset(data: &Value) -> io::Result<String> {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("files reset output requires message"))?;
    let files_cleared = data
        .get("files_cleared")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    Ok([
        message.to_string(),
        format!("{files_cleared} file registrations were cleared and the ledger was emptied."),
        "Everything can be imported again from scratch.".to_string(),
    ]
    .join("\n"))
}
