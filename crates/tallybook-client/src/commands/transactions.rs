use std::path::Path;

use crate::ClientResult;
use crate::commands::common::{KindFilter, load_setup, record_to_row};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ListData;
use crate::ledger::LedgerStore;

#[derive(Debug, Default)]
pub struct ListOptions<'a> {
    pub month: Option<String>,
    pub account: Option<String>,
    pub kind: KindFilter,
    pub home_override: Option<&'a Path>,
}

pub fn list(options: ListOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(options.home_override)?;
    let store = LedgerStore::load(&setup.ledger_path)?;

    let rows: Vec<_> = store
        .records()
        .iter()
        .filter(|record| {
            options
                .month
                .as_deref()
                .is_none_or(|month| record.month.eq_ignore_ascii_case(month.trim()))
        })
        .filter(|record| {
            options
                .account
                .as_deref()
                .is_none_or(|account| record.account.eq_ignore_ascii_case(account.trim()))
        })
        .filter(|record| options.kind.matches(record))
        .map(record_to_row)
        .collect();

    let data = ListData {
        count: rows.len(),
        ledger_total: store.len(),
        rows,
    };

    success("list", data)
}
