use std::path::Path;

use crate::ClientResult;
use crate::commands::common::load_setup;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ImportData;
use crate::import;

#[derive(Debug, Default)]
pub struct ImportOptions<'a> {
    pub paths: Vec<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run(paths: Vec<String>) -> ClientResult<SuccessEnvelope> {
    run_with_options(ImportOptions {
        paths,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ImportOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(options.home_override)?;
    let execution = import::execute(&setup, &options.paths)?;

    let data = ImportData {
        outcomes: execution.outcomes,
        files_loaded: execution.files_loaded,
        files_skipped: execution.files_skipped,
        files_failed: execution.files_failed,
        rows_added: execution.rows_added,
        ledger_total: execution.ledger_total,
    };

    success("import", data)
}
