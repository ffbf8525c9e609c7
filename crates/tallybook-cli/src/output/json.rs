use std::io;

use serde::Serialize;
use serde_json::{Value, json};
use tallybook_client::{ClientError, SuccessEnvelope};

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        // row-listing commands return the bare array for easy piping
        "list" | "dedupe find" | "history show" | "files list" => {
            rows_array(&success.data, rows_key(&success.command))
        }
        _ => json!({
            "ok": true,
            "version": JSON_VERSION,
            "data": success.data.clone()
        }),
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    let payload = json!({
        "error": {
            "code": error.code,
            "message": error.message,
            "recovery_steps": error.recovery_steps,
        }
    });
    serialize_json_pretty(&payload)
}

fn rows_key(command: &str) -> &'static str {
    match command {
        "history show" => "entries",
        "files list" => "files",
        _ => "rows",
    }
}

fn rows_array(data: &Value, key: &str) -> Value {
    let rows = data
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    Value::Array(rows)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}
