use std::path::Path;

use crate::ClientResult;
use crate::audit::AuditLog;
use crate::commands::common::load_setup;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{HistoryClearData, HistoryData};

pub fn show() -> ClientResult<SuccessEnvelope> {
    show_with_home_override(None)
}

#[doc(hidden)]
pub fn show_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let entries = AuditLog::new(&setup.history_path).load()?;

    let data = HistoryData {
        total: entries.len(),
        entries,
    };

    success("history show", data)
}

pub fn clear() -> ClientResult<SuccessEnvelope> {
    clear_with_home_override(None)
}

#[doc(hidden)]
pub fn clear_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    AuditLog::new(&setup.history_path).clear()?;

    let data = HistoryClearData {
        message: "Operation history cleared.".to_string(),
    };

    success("history clear", data)
}
