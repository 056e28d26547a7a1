//! Command-line interface layer.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;

pub use args::{Arguments, Command, InitCommand, ReportArgs, ReportCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Report(cmd)) => commands::report::report(cmd),
        Some(Command::Init(cmd)) => commands::init::init(cmd),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
