mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use stdout_io::write_stdout_text;
use tallybook_client::ClientError;

const ROOT_HELP: &str = "Tallybook - revenue and expense ledger

Usage:
  tallybook <command>

Start here:
  tallybook import <path>
  tallybook summary
  tallybook list
";

const TOP_LEVEL_HELP: &str = "Tallybook — revenue and expense ledger

USAGE: tallybook <command>

Bring in your transactions:
  tallybook import <path> [<path>...]                     Import spreadsheet (CSV) exports
  tallybook add --help                                    Record a single entry by hand

Look at the numbers:
  tallybook list [--month M] [--account A] [--kind K]     Browse ledger rows
  tallybook summary                                       Totals, monthly rollup, top categories

Keep the ledger clean:
  tallybook dedupe find                                   Show duplicate rows
  tallybook dedupe remove                                 Keep one copy per duplicate group
  tallybook files list                                    Show which files were imported
  tallybook purge manual                                  Delete hand-entered rows only

Take the data elsewhere:
  tallybook export csv <path>
  tallybook export json <path>

Audit trail:
  tallybook history show                                  Recent operations, newest first

Run `tallybook <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if is_top_level_help_request(&raw_args) {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so our "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Builds the subcommand path from raw CLI args for use in help hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["dedupe", "find", ..] => Some("dedupe find"),
        ["dedupe", "remove", ..] => Some("dedupe remove"),
        ["dedupe", ..] => Some("dedupe"),
        ["history", "show", ..] => Some("history show"),
        ["history", "clear", ..] => Some("history clear"),
        ["history", ..] => Some("history"),
        ["files", "list", ..] => Some("files list"),
        ["files", "remove", ..] => Some("files remove"),
        ["files", "reset", ..] => Some("files reset"),
        ["files", ..] => Some("files"),
        ["export", "csv", ..] => Some("export csv"),
        ["export", "json", ..] => Some("export json"),
        ["export", ..] => Some("export"),
        ["purge", "manual", ..] => Some("purge manual"),
        ["purge", "all", ..] => Some("purge all"),
        ["purge", ..] => Some("purge"),
        ["import", ..] => Some("import"),
        ["add", ..] => Some("add"),
        ["list", ..] => Some("list"),
        ["summary", ..] => Some("summary"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn is_internal_error(error: &ClientError) -> bool {
    error.code.starts_with("internal_")
        || matches!(
            error.code.as_str(),
            "ledger_init_permission_denied" | "ledger_corrupt" | "ledger_init_failed"
        )
}
