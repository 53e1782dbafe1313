//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daylog", version, about = "Date-routed file logger")]
pub struct Cli {
    /// Directory the log files live in
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Print results as JSON instead of plain text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Rename a weekend file left over from an earlier weekend before writing
    #[arg(long = "archive-weekends", action = ArgAction::SetTrue)]
    pub archive_weekends: bool,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a message to today's log file
    Log {
        /// Message text, recorded verbatim
        message: String,
    },
    /// Print the file today's message would go to, without writing
    Target,
}
