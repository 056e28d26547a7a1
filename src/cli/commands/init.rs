use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::InitCommand, exit_status::ExitStatus};
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::render::text::SUCCESS_MARK;

/// Write a config file into the current directory.
pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    init_in(Path::new("."), cmd)
}

fn init_in(dir: &Path, cmd: InitCommand) -> Result<ExitStatus> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !cmd.force {
        eprintln!(
            "Error: {} already exists (use --force to overwrite)",
            CONFIG_FILE_NAME
        );
        return Ok(ExitStatus::Failure);
    }

    let mut config = Config::default();
    if let Some(po_dir) = cmd.po_dir {
        config.po_directory = po_dir;
    }
    if let Some(msgfmt) = cmd.msgfmt {
        config.msgfmt_cmd = msgfmt;
    }
    config.validate()?;

    let json = serde_json::to_string_pretty(&config).context("Failed to generate config.")?;
    fs::write(&config_path, json)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    Ok(ExitStatus::Success)
}
