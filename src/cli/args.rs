//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `report`: Collect msgfmt statistics for all catalogs and print a report
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::render::Format;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag of the command, if it has one.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Report(cmd)) => cmd.args.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Directory containing PO files (overrides config file)
    #[arg(long)]
    pub po_dir: Option<PathBuf>,

    /// msgfmt command (overrides config file)
    #[arg(long, env = "GETTEXT_STATS_MSGFMT")]
    pub msgfmt: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with status 1 if any catalog was skipped or could not be parsed
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub args: ReportArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory containing PO files, relative to the config file
    #[arg(long)]
    pub po_dir: Option<String>,

    /// msgfmt command to record in the config file
    #[arg(long)]
    pub msgfmt: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect translation statistics for PO files and print a report
    Report(ReportCommand),
    /// Initialize a new .gettext-stats.json configuration file
    Init(InitCommand),
}
