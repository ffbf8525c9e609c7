use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `tallybook {cmd} --help` for usage."),
            None => "Run `tallybook --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn header_not_found(file_name: &str) -> Self {
        Self::new(
            "header_not_found",
            &format!("No header row with a `date` column was found in `{file_name}`."),
            vec![
                "Check that the file is the expected spreadsheet export with a `date` column."
                    .to_string(),
                "Other files in the same batch are imported independently.".to_string(),
            ],
        )
    }

    pub fn validation_failed(message: &str) -> Self {
        Self::new(
            "validation_failed",
            message,
            vec![
                "Fill in all required fields and retry.".to_string(),
                "Run `tallybook add --help` for field requirements.".to_string(),
            ],
        )
    }

    pub fn persistence_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "persistence_failed",
            &format!("Could not write `{location}`: {detail}"),
            vec![format!(
                "Check free space and write access to `{location}`, then retry the command."
            )],
        )
    }

    pub fn ledger_corrupt(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_corrupt",
            &format!("Stored document at `{location}` is not valid JSON: {detail}"),
            vec![format!(
                "Restore `{location}` from a backup or a previous `tallybook export json` file."
            )],
        )
    }

    pub fn file_not_registered(name: &str) -> Self {
        Self::new(
            "file_not_registered",
            &format!("File `{name}` is not in the loaded-files registry."),
            vec!["Run `tallybook files list` to see registered file names.".to_string()],
        )
    }

    pub fn export_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "export_failed",
            &format!("Could not write export to `{location}`: {detail}"),
            vec![format!("Check write access to `{location}` and retry.")],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn ledger_init_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_init_permission_denied",
            &format!("Cannot initialize the tallybook home at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `TALLYBOOK_HOME` to a writable directory."
            )],
        )
    }

    pub fn ledger_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_init_failed",
            &format!("Tallybook home initialization failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
