use std::io;

use serde_json::Value;

use super::format;

pub fn render_export(data: &Value) -> io::Result<String> {
    let path = data
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("export output requires path"))?;
    let format_label = data.get("format").and_then(Value::as_str).unwrap_or("");
    let rows = data.get("rows").and_then(Value::as_u64).unwrap_or(0);

    let mut lines = vec!["Export completed.".to_string(), String::new()];
    lines.extend(format::key_value_rows(
        &[
            ("Format:", format_label.to_uppercase()),
            ("Rows:", rows.to_string()),
            ("Written to:", path.to_string()),
        ],
        2,
    ));

    Ok(lines.join("\n"))
}
