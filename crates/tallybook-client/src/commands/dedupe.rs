use std::path::Path;

use crate::ClientResult;
use crate::audit::AuditLog;
use crate::commands::common::{load_setup, record_to_row};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{DedupeFindData, DedupeRemoveData};
use crate::dedupe;
use crate::ledger::LedgerStore;

pub fn find() -> ClientResult<SuccessEnvelope> {
    find_with_home_override(None)
}

#[doc(hidden)]
pub fn find_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let store = LedgerStore::load(&setup.ledger_path)?;

    let rows: Vec<_> = dedupe::find_duplicates(store.records())
        .into_iter()
        .map(record_to_row)
        .collect();

    let data = DedupeFindData {
        total: rows.len(),
        rows,
    };

    success("dedupe find", data)
}

pub fn remove() -> ClientResult<SuccessEnvelope> {
    remove_with_home_override(None)
}

#[doc(hidden)]
pub fn remove_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let mut store = LedgerStore::load(&setup.ledger_path)?;

    let (kept, removed) = dedupe::remove_duplicates(store.records().to_vec());
    if removed > 0 {
        store.replace_all(kept)?;
        AuditLog::new(&setup.history_path).record(
            "duplicates removed",
            &format!("Removed {removed} duplicate rows"),
        )?;
    }

    let data = DedupeRemoveData {
        removed,
        remaining: store.len(),
    };

    success("dedupe remove", data)
}
