use std::path::Path;

use crate::commands::common::load_setup;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{FileRemoveData, FilesData, FilesResetData};
use crate::ledger::LedgerStore;
use crate::registry::FileRegistry;
use crate::{ClientError, ClientResult};

pub fn list() -> ClientResult<SuccessEnvelope> {
    list_with_home_override(None)
}

#[doc(hidden)]
pub fn list_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let files = FileRegistry::new(&setup.registry_path).load()?;

    let data = FilesData {
        total_files: files.len(),
        total_rows: files.iter().map(|file| file.rows).sum(),
        files,
    };

    success("files list", data)
}

pub fn remove(name: &str) -> ClientResult<SuccessEnvelope> {
    remove_with_home_override(name, None)
}

#[doc(hidden)]
pub fn remove_with_home_override(
    name: &str,
    home_override: Option<&Path>,
) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let removed = FileRegistry::new(&setup.registry_path).unregister(name)?;
    if !removed {
        return Err(ClientError::file_not_registered(name));
    }

    let data = FileRemoveData {
        name: name.to_string(),
        message: format!(
            "`{name}` removed from the registry; its file name can be imported again."
        ),
    };

    success("files remove", data)
}

/// Bulk reset: forget every registered file and write out an empty ledger so
/// the same uploads can be re-imported from scratch. History is untouched.
pub fn reset() -> ClientResult<SuccessEnvelope> {
    reset_with_home_override(None)
}

#[doc(hidden)]
pub fn reset_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let registry = FileRegistry::new(&setup.registry_path);
    let files_cleared = registry.load()?.len();

    registry.clear()?;
    let mut store = LedgerStore::load(&setup.ledger_path)?;
    store.replace_all(Vec::new())?;

    let data = FilesResetData {
        files_cleared,
        message: "File registry cleared and ledger emptied; re-import your files.".to_string(),
    };

    success("files reset", data)
}
