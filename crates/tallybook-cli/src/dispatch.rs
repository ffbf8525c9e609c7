use tallybook_client::commands::{self, KindFilter};
use tallybook_client::ledger::AmountKind;
use tallybook_client::{ClientResult, SuccessEnvelope};

use crate::cli::{
    Cli, Commands, DedupeCommand, ExportCommand, FilesCommand, HistoryCommand, PurgeCommand,
};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Import { paths, .. } => commands::import::run(paths.clone()),
        Commands::Add {
            added_by,
            date,
            month,
            account,
            payment_type,
            description,
            reference,
            kind,
            amount,
            ..
        } => commands::add::run(commands::add::AddOptions {
            added_by: added_by.clone(),
            date: date.as_str().to_string(),
            month: month.clone(),
            account: account.clone(),
            payment_type: payment_type.clone(),
            description: description.clone(),
            reference: reference.clone(),
            kind: amount_kind_from_str(kind),
            amount: *amount,
            home_override: None,
        }),
        Commands::List {
            month,
            account,
            kind,
            ..
        } => commands::transactions::list(commands::transactions::ListOptions {
            month: month.clone(),
            account: account.clone(),
            kind: kind_filter_from_str(kind),
            home_override: None,
        }),
        Commands::Summary { .. } => commands::summary::run(),
        Commands::Dedupe { command } => match command {
            DedupeCommand::Find { .. } => commands::dedupe::find(),
            DedupeCommand::Remove { .. } => commands::dedupe::remove(),
        },
        Commands::History { command } => match command {
            HistoryCommand::Show { .. } => commands::history::show(),
            HistoryCommand::Clear { .. } => commands::history::clear(),
        },
        Commands::Files { command } => match command {
            FilesCommand::List { .. } => commands::files::list(),
            FilesCommand::Remove { name, .. } => commands::files::remove(name),
            FilesCommand::Reset { .. } => commands::files::reset(),
        },
        Commands::Export { command } => match command {
            ExportCommand::Csv { out, .. } => commands::export::csv(commands::export::ExportOptions {
                out: out.clone(),
                home_override: None,
            }),
            ExportCommand::Json { out, .. } => {
                commands::export::json(commands::export::ExportOptions {
                    out: out.clone(),
                    home_override: None,
                })
            }
        },
        Commands::Purge { command } => match command {
            PurgeCommand::Manual { .. } => commands::purge::manual(),
            PurgeCommand::All { .. } => commands::purge::all(),
        },
    }
}

// cli.rs value parsers guarantee these strings; anything else falls out
// as the conservative default.
fn amount_kind_from_str(value: &str) -> AmountKind {
    match value {
        "revenue" => AmountKind::Revenue,
        _ => AmountKind::Expense,
    }
}

fn kind_filter_from_str(value: &str) -> KindFilter {
    match value {
        "revenue" => KindFilter::Revenue,
        "expense" => KindFilter::Expense,
        _ => KindFilter::All,
    }
}
