//! History CLI commands

use clap::Subcommand;

use crate::display::format_history;
use crate::error::PassgenResult;
use crate::services::HistoryLog;
use crate::storage::Storage;

use super::prompt::confirm;

/// History subcommands
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recently generated passwords, newest first
    List,
    /// Erase the history
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a history command
pub fn handle_history_command(storage: &Storage, cmd: HistoryCommands) -> PassgenResult<()> {
    let log = HistoryLog::new(storage);

    match cmd {
        HistoryCommands::List => {
            let entries = log.list()?;
            println!("{}", format_history(&entries).trim_end());
        }

        HistoryCommands::Clear { force } => {
            let count = log.list()?.len();
            if count == 0 {
                println!("History is already empty.");
                return Ok(());
            }

            if !force && !confirm(&format!("Clear {} history entries?", count))? {
                println!("Aborted.");
                return Ok(());
            }

            log.clear()?;
            println!("Cleared {} history entries.", count);
        }
    }

    Ok(())
}
