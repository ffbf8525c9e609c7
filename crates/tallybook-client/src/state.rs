use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientError, ClientResult};

pub fn resolve_ledger_home(home_override: Option<&Path>) -> ClientResult<PathBuf> {
    let candidate = match home_override {
        Some(path) => path.to_path_buf(),
        None => {
            if let Some(override_path) = std::env::var_os("TALLYBOOK_HOME") {
                PathBuf::from(override_path)
            } else if let Some(home_path) = home::home_dir() {
                home_path.join(".tallybook")
            } else {
                return Err(ClientError::ledger_init_failed(
                    Path::new("."),
                    "Could not resolve a home directory for ledger initialization.",
                ));
            }
        }
    };

    absolutize(&candidate)
}

pub fn ensure_ledger_directory(path: &Path) -> ClientResult<()> {
    fs::create_dir_all(path).map_err(|error| map_io_error(path, &error))?;
    set_private_permissions_best_effort(path);
    Ok(())
}

pub fn ledger_document_path(home: &Path) -> PathBuf {
    home.join("ledger.json")
}

pub fn history_document_path(home: &Path) -> PathBuf {
    home.join("history.json")
}

pub fn registry_document_path(home: &Path) -> PathBuf {
    home.join("files.json")
}

/// Reads a persisted collection. A missing document is an empty collection,
/// not an error; an unreadable or non-JSON document is surfaced as corrupt.
pub fn load_document<T>(path: &Path) -> ClientResult<Vec<T>>
where
    T: DeserializeOwned,
{
    if !path.exists() {
        return Ok(Vec::new());
    }

    let body = fs::read_to_string(path).map_err(|error| map_io_error(path, &error))?;
    serde_json::from_str(&body).map_err(|error| ClientError::ledger_corrupt(path, &error.to_string()))
}

/// Whole-file rewrite. Every mutation of a persisted collection goes through
/// here; write cost is bounded by total collection size.
pub fn persist_document<T>(path: &Path, items: &[T]) -> ClientResult<()>
where
    T: Serialize,
{
    let body = serde_json::to_string_pretty(items)
        .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;
    fs::write(path, body).map_err(|error| ClientError::persistence_failed(path, &error.to_string()))
}

pub fn delete_document(path: &Path) -> ClientResult<()> {
    if !path.exists() {
        return Ok(());
    }
    fs::remove_file(path)
        .map_err(|error| ClientError::persistence_failed(path, &error.to_string()))
}

pub fn map_io_error(path: &Path, error: &std::io::Error) -> ClientError {
    if error.kind() == std::io::ErrorKind::PermissionDenied {
        return ClientError::ledger_init_permission_denied(path, &error.to_string());
    }

    ClientError::ledger_init_failed(path, &error.to_string())
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ClientError::ledger_init_failed(path, &error.to_string()))
}

#[cfg(unix)]
fn set_private_permissions_best_effort(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o700));
}

#[cfg(not(unix))]
fn set_private_permissions_best_effort(_path: &Path) {}
