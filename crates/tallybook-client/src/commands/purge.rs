use std::path::Path;

use crate::ClientResult;
use crate::audit::AuditLog;
use crate::commands::common::load_setup;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::PurgeData;
use crate::ledger::LedgerStore;

/// Drops only the records entered through the manual-entry form; bulk
/// imported rows stay.
pub fn manual() -> ClientResult<SuccessEnvelope> {
    manual_with_home_override(None)
}

#[doc(hidden)]
pub fn manual_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let mut store = LedgerStore::load(&setup.ledger_path)?;

    let removed = store.remove_where(|record| record.added_manually)?;
    if removed > 0 {
        AuditLog::new(&setup.history_path).record(
            "manual entries removed",
            &format!("Removed {removed} manually added rows"),
        )?;
    }

    let data = PurgeData {
        removed,
        remaining: store.len(),
        message: format!("Removed {removed} manually added rows."),
    };

    success("purge manual", data)
}

/// The irreversible delete-all path: removes the ledger document and the
/// history document outright. The file registry is left as-is; run
/// `files reset` to allow the same file names to be imported again.
pub fn all() -> ClientResult<SuccessEnvelope> {
    all_with_home_override(None)
}

#[doc(hidden)]
pub fn all_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let mut store = LedgerStore::load(&setup.ledger_path)?;

    let removed = store.len();
    store.clear()?;
    AuditLog::new(&setup.history_path).delete_file()?;

    let data = PurgeData {
        removed,
        remaining: 0,
        message: format!("Deleted all {removed} rows and the operation history."),
    };

    success("purge all", data)
}
