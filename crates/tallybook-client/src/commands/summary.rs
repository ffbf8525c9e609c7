use std::path::Path;

use crate::ClientResult;
use crate::commands::common::load_setup;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SummaryData;
use crate::ledger::{AmountKind, LedgerStore};
use crate::reports;

/// Presentation default for the category rollups.
const TOP_CATEGORY_LIMIT: usize = 10;

pub fn run() -> ClientResult<SuccessEnvelope> {
    run_with_home_override(None)
}

#[doc(hidden)]
pub fn run_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let store = LedgerStore::load(&setup.ledger_path)?;
    let records = store.records();

    let data = SummaryData {
        stats: reports::summarize(records),
        monthly: reports::monthly_rollup(records),
        top_expense_categories: reports::top_categories(
            records,
            AmountKind::Expense,
            TOP_CATEGORY_LIMIT,
        ),
        top_revenue_categories: reports::top_categories(
            records,
            AmountKind::Revenue,
            TOP_CATEGORY_LIMIT,
        ),
    };

    success("summary", data)
}
