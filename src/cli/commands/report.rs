use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::ReportCommand, exit_status::ExitStatus};
use crate::{
    config::load_config,
    render::render_to,
    scanner::scan_catalogs,
    stats::{Stats, StatsCollector},
    tool::MsgfmtRunner,
};

pub fn report(cmd: ReportCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    let loaded = load_config(&cwd)?;
    let base_dir = loaded.base_dir(&cwd);
    let config = loaded.config;

    let po_dir = args
        .po_dir
        .clone()
        .unwrap_or_else(|| base_dir.join(&config.po_directory));
    let program = args.msgfmt.clone().unwrap_or(config.msgfmt_cmd);

    tracing::info!(
        "Gathering statistics for po files in '{}'.",
        po_dir.display()
    );
    let scan = scan_catalogs(&po_dir, &config.includes, &config.ignores)?;

    let stats = StatsCollector::new(MsgfmtRunner::new(program)).collect(&scan.files);

    match &args.output {
        Some(path) => write_report_file(&stats, args.format, path)?,
        None => render_to(&stats, args.format, &mut io::stdout().lock())
            .context("Failed to write report")?,
    }

    print_incomplete_warning_to(
        &stats,
        scan.skipped_count,
        args.verbose,
        &mut io::stderr().lock(),
    )
    .context("Failed to write warnings")?;

    Ok(exit_status(&stats, scan.skipped_count, args.strict))
}

/// Partial results only fail the run under `--strict`.
fn exit_status(stats: &Stats, unreadable: usize, strict: bool) -> ExitStatus {
    if strict && (!stats.is_complete() || unreadable > 0) {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}

fn write_report_file(stats: &Stats, format: crate::render::Format, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    render_to(stats, format, &mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    tracing::info!("Wrote report to {}", path.display());
    Ok(())
}

/// Summarise unreadable paths, skipped catalogs and parse problems on stderr.
///
/// Details are only in the log, which `-v` enables.
fn print_incomplete_warning_to<W: Write>(
    stats: &Stats,
    unreadable: usize,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    if verbose {
        return Ok(());
    }
    if unreadable > 0 {
        writeln!(
            writer,
            "{} {} path(s) could not be read while scanning (use {} for details)",
            "warning:".bold().yellow(),
            unreadable,
            "-v".cyan()
        )?;
    }
    let skipped = stats.skipped().len();
    if skipped > 0 {
        writeln!(
            writer,
            "{} {} catalog(s) skipped (use {} for details)",
            "warning:".bold().yellow(),
            skipped,
            "-v".cyan()
        )?;
    }
    let unparsed = distinct_files(stats);
    if unparsed > 0 {
        writeln!(
            writer,
            "{} {} catalog(s) had unparseable statistics (use {} for details)",
            "warning:".bold().yellow(),
            unparsed,
            "-v".cyan()
        )?;
    }
    Ok(())
}

fn distinct_files(stats: &Stats) -> usize {
    let mut files: Vec<&PathBuf> = stats.problems().iter().map(|p| &p.file).collect();
    files.dedup();
    files.len()
}
