use std::io;

use serde_json::Value;

use super::format;

pub fn render_history_show(data: &Value) -> io::Result<String> {
    let entries = data
        .get("entries")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("history output requires entries"))?;

    if entries.is_empty() {
        return Ok("No operations recorded yet.".to_string());
    }

    let total = data.get("total").and_then(Value::as_u64).unwrap_or(0);
    let count_label = if total == 1 {
        "1 operation recorded (newest first).".to_string()
    } else {
        format!("{total} operations recorded (newest first).")
    };

    let mut lines = vec![count_label, String::new()];
    for entry in entries {
        let timestamp = entry
            .get("timestamp")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        let action = entry
            .get("action")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        lines.push(format!("  {timestamp}  {action}"));
        if let Some(details) = entry.get("details").and_then(Value::as_str)
            && !details.is_empty()
        {
            lines.push(format!("    {details}"));
        }
    }

    Ok(lines.join("\n"))
}

pub fn render_history_clear(data: &Value) -> io::Result<String> {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("history clear output requires message"))?;

    let mut lines = vec![message.to_string()];
    lines.extend(format::key_value_rows(
        &[("Entries now:", "0".to_string())],
        2,
    ));
    Ok(lines.join("\n"))
}
