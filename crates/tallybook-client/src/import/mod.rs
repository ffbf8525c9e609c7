pub(crate) mod normalize;

use std::fs;
use std::path::Path;

use crate::ClientResult;
use crate::audit::AuditLog;
use crate::contracts::types::{FileOutcome, FileOutcomeStatus};
use crate::ledger::LedgerStore;
use crate::registry::FileRegistry;
use crate::setup::SetupContext;

#[derive(Debug)]
pub(crate) struct ImportExecution {
    pub outcomes: Vec<FileOutcome>,
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub rows_added: usize,
    pub ledger_total: usize,
}

/// Ingests a batch of uploaded files. Each file is gated on its name through
/// the registry, normalized, appended, and audited; a failure on one file
/// never aborts the rest of the batch.
pub(crate) fn execute(setup: &SetupContext, paths: &[String]) -> ClientResult<ImportExecution> {
    let mut store = LedgerStore::load(&setup.ledger_path)?;
    let registry = FileRegistry::new(&setup.registry_path);
    let audit = AuditLog::new(&setup.history_path);

    let mut outcomes = Vec::with_capacity(paths.len());
    let mut rows_added = 0usize;

    for path in paths {
        let outcome = import_one(path, &mut store, &registry, &audit);
        if outcome.status == FileOutcomeStatus::Loaded {
            rows_added += outcome.rows;
        }
        outcomes.push(outcome);
    }

    let files_loaded = count_status(&outcomes, FileOutcomeStatus::Loaded);
    let files_skipped = count_status(&outcomes, FileOutcomeStatus::Skipped);
    let files_failed = count_status(&outcomes, FileOutcomeStatus::Failed);

    Ok(ImportExecution {
        outcomes,
        files_loaded,
        files_skipped,
        files_failed,
        rows_added,
        ledger_total: store.len(),
    })
}

fn import_one(
    path: &str,
    store: &mut LedgerStore,
    registry: &FileRegistry,
    audit: &AuditLog,
) -> FileOutcome {
    let name = file_name(path);

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => return FileOutcome::failed(&name, &format!("Could not read `{path}`: {error}")),
    };

    let records = match normalize::parse_table(&content, &name) {
        Ok(records) => records,
        Err(error) => return FileOutcome::failed(&name, &error.message),
    };
    let row_count = records.len();

    // File-level dedupe gate: a name already in the registry is a silent
    // no-op, reported as skipped rather than errored.
    match registry.register(&name, row_count) {
        Ok(true) => {}
        Ok(false) => return FileOutcome::skipped(&name),
        Err(error) => return FileOutcome::failed(&name, &error.message),
    }

    // A failed persist keeps the rows in memory; the next successful write
    // in this batch carries them to disk.
    if let Err(error) = store.append(records) {
        return FileOutcome::failed(&name, &error.message);
    }

    if let Err(error) = audit.record("file loaded", &format!("Loaded {row_count} rows from {name}")) {
        return FileOutcome {
            file: name,
            status: FileOutcomeStatus::Loaded,
            rows: row_count,
            detail: Some(format!("Rows were imported but history was not updated: {}", error.message)),
        };
    }

    FileOutcome::loaded(&name, row_count)
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

fn count_status(outcomes: &[FileOutcome], status: FileOutcomeStatus) -> usize {
    outcomes
        .iter()
        .filter(|outcome| outcome.status == status)
        .count()
}
