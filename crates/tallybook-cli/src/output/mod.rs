mod error_text;
mod export_text;
mod files_text;
mod format;
mod history_text;
mod import_text;
mod json;
mod ledger_text;
mod mode;
mod summary_text;

use std::io;

use tallybook_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    println!("{body}");
    Ok(())
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    println!("{body}");
    Ok(())
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "import" => import_text::render_import_run(&success.data),
        "add" => ledger_text::render_add(&success.data),
        "list" => ledger_text::render_list(&success.data),
        "summary" => summary_text::render_summary(&success.data),
        "dedupe find" => ledger_text::render_dedupe_find(&success.data),
        "dedupe remove" => ledger_text::render_dedupe_remove(&success.data),
        "history show" => history_text::render_history_show(&success.data),
        "history clear" => history_text::render_history_clear(&success.data),
        "files list" => files_text::render_files_list(&success.data),
        "files remove" => files_text::render_file_remove(&success.data),
        "files reset" => files_text::render_files_reset(&success.data),
        "export csv" | "export json" => export_text::render_export(&success.data),
        "purge manual" | "purge all" => {
            ledger_text::render_purge(&success.command, &success.data)
        }
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
