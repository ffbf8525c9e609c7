use crate::cli::{
    Commands, DedupeCommand, ExportCommand, FilesCommand, HistoryCommand, PurgeCommand,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Import { json, .. }
        | Commands::Add { json, .. }
        | Commands::List { json, .. }
        | Commands::Summary { json } => *json,
        Commands::Dedupe { command } => match command {
            DedupeCommand::Find { json } | DedupeCommand::Remove { json } => *json,
        },
        Commands::History { command } => match command {
            HistoryCommand::Show { json } | HistoryCommand::Clear { json } => *json,
        },
        Commands::Files { command } => match command {
            FilesCommand::List { json }
            | FilesCommand::Remove { json, .. }
            | FilesCommand::Reset { json } => *json,
        },
        Commands::Export { command } => match command {
            ExportCommand::Csv { json, .. } | ExportCommand::Json { json, .. } => *json,
        },
        Commands::Purge { command } => match command {
            PurgeCommand::Manual { json } | PurgeCommand::All { json } => *json,
        },
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}
