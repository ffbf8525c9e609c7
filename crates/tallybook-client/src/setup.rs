use std::path::{Path, PathBuf};

use crate::ClientResult;
use crate::state::{
    ensure_ledger_directory, history_document_path, ledger_document_path, registry_document_path,
    resolve_ledger_home,
};

/// Resolved locations of the three persisted documents. Every pipeline
/// operation takes this explicitly; nothing reads ambient session state.
#[derive(Debug, Clone)]
pub struct SetupContext {
    pub home: PathBuf,
    pub ledger_path: PathBuf,
    pub history_path: PathBuf,
    pub registry_path: PathBuf,
}

pub fn ensure_initialized() -> ClientResult<SetupContext> {
    ensure_initialized_with_home_override(None)
}

pub fn ensure_initialized_at(home_override: &Path) -> ClientResult<SetupContext> {
    ensure_initialized_with_home_override(Some(home_override))
}

fn ensure_initialized_with_home_override(
    home_override: Option<&Path>,
) -> ClientResult<SetupContext> {
    let ledger_home = resolve_ledger_home(home_override)?;
    ensure_ledger_directory(&ledger_home)?;

    Ok(SetupContext {
        ledger_path: ledger_document_path(&ledger_home),
        history_path: history_document_path(&ledger_home),
        registry_path: registry_document_path(&ledger_home),
        home: ledger_home,
    })
}
