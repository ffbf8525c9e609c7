use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tallybook_client::reports::{MONTH_NAMES, month_rank};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_month_name(value: &str) -> Result<String, String> {
    match month_rank(value) {
        Some(rank) => Ok(MONTH_NAMES[rank].to_string()),
        None => Err("month must be one of January through December".to_string()),
    }
}

pub fn parse_entry_kind(value: &str) -> Result<String, String> {
    match value {
        "revenue" | "expense" => Ok(value.to_string()),
        _ => Err("kind must be `revenue` or `expense`".to_string()),
    }
}

pub fn parse_kind_filter(value: &str) -> Result<String, String> {
    match value {
        "all" | "revenue" | "expense" => Ok(value.to_string()),
        _ => Err("kind must be one of: all, revenue, expense".to_string()),
    }
}

/// Extended help shown after `tallybook import --help`.
pub const IMPORT_AFTER_HELP: &str = "\
How import works:
  Tallybook reads spreadsheet exports saved as CSV. The header row does not
  have to be the first row: everything above the row containing a `date`
  column is skipped as banner content.

  Expected columns (order does not matter, Title Case accepted):
    date, month, account, payment type, description, reference,
    expense, revenue

  Rows without a date cell are dropped. Amount cells that fail to parse as
  numbers become 0 instead of failing the file.

  Each file name is imported at most once. A file name already in the
  registry is skipped; run `tallybook files remove <name>` or
  `tallybook files reset` to allow it again.

  A failure in one file never aborts the other files in the same call.
";

#[derive(Debug, Parser)]
#[command(
    name = "tallybook",
    version,
    about = "revenue and expense ledger",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import one or more spreadsheet (CSV) files into the ledger
    #[command(after_long_help = IMPORT_AFTER_HELP, arg_required_else_help = true)]
    Import {
        /// Paths of the files to import
        #[arg(required = true)]
        paths: Vec<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Record a single transaction by hand
    Add {
        /// Name of the person recording the entry
        #[arg(long = "by")]
        added_by: String,
        /// Transaction date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        date: IsoDate,
        /// Month the entry belongs to (January through December)
        #[arg(long, value_parser = parse_month_name)]
        month: String,
        /// Account or category label
        #[arg(long)]
        account: String,
        /// Payment type (e.g. cash, bank, check, transfer)
        #[arg(long = "payment")]
        payment_type: String,
        /// Free-text description
        #[arg(long)]
        description: String,
        /// Optional reference or invoice number
        #[arg(long, default_value = "")]
        reference: String,
        /// Entry side: revenue or expense
        #[arg(long, value_parser = parse_entry_kind)]
        kind: String,
        /// Positive amount
        #[arg(long)]
        amount: f64,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List ledger transactions, optionally filtered
    List {
        /// Only rows with this month label
        #[arg(long)]
        month: Option<String>,
        /// Only rows with this account label
        #[arg(long)]
        account: Option<String>,
        /// Restrict to one amount side: all, revenue, or expense
        #[arg(long, default_value = "all", value_parser = parse_kind_filter)]
        kind: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show totals, the monthly rollup, and top categories
    Summary {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Find or remove records sharing (date, account, expense, revenue)
    #[command(arg_required_else_help = true)]
    Dedupe {
        #[command(subcommand)]
        command: DedupeCommand,
    },
    /// Inspect or clear the operation history
    #[command(arg_required_else_help = true)]
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Manage the registry of imported file names
    #[command(arg_required_else_help = true)]
    Files {
        #[command(subcommand)]
        command: FilesCommand,
    },
    /// Export the ledger to CSV or JSON
    #[command(arg_required_else_help = true)]
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },
    /// Bulk-delete ledger data (irreversible)
    #[command(arg_required_else_help = true)]
    Purge {
        #[command(subcommand)]
        command: PurgeCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DedupeCommand {
    /// Show every record participating in a duplicate collision
    Find {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Keep the first record per collision group and drop the rest
    Remove {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum HistoryCommand {
    /// Show the newest-first operation history (capped at 100 entries)
    Show {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Overwrite the history with an empty log
    Clear {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FilesCommand {
    /// List registered source files with their ingest-time row counts
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Remove one file name from the registry so it can be imported again
    Remove {
        /// Registered file name (as shown by `files list`)
        name: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Clear the registry and empty the ledger for a clean re-import
    Reset {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ExportCommand {
    /// Write a CSV export with human-readable headers
    Csv {
        /// Output file path
        out: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Write the full ledger as a JSON array of records
    Json {
        /// Output file path
        out: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PurgeCommand {
    /// Delete only manually added records
    Manual {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Delete the entire ledger and the operation history
    All {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
