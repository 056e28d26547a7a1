//! Terminal table output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::stats::{Stats, StatsEntry};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

const HEADERS: [&str; 6] = ["Locale", "Tag", "Translated", "Untranslated", "Fuzzy", "Total"];

pub fn render_to<W: Write>(stats: &Stats, writer: &mut W) -> io::Result<()> {
    let items = stats.sorted_items();
    if items.is_empty() {
        writeln!(writer, "{}", "No catalog statistics collected".dimmed())?;
        return Ok(());
    }

    let rows: Vec<[String; 6]> = items.iter().map(|entry| row(entry)).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i], i >= 2))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(writer, "{}", header.trim_end().bold())?;

    for row in &rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i], i >= 2))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(writer, "{}", line.trim_end())?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Collected statistics for {} catalog(s)", rows.len()).green()
    )?;
    Ok(())
}

fn row(entry: &StatsEntry) -> [String; 6] {
    [
        entry.locale().display_name(),
        entry.locale().tag().to_string(),
        entry.translated().to_string(),
        entry.untranslated().to_string(),
        entry.fuzzy().to_string(),
        entry.total().to_string(),
    ]
}

/// Pad by display width, which `format!` width specifiers do not account for.
fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell)));
    if right_align {
        format!("{}{}", fill, cell)
    } else {
        format!("{}{}", cell, fill)
    }
}
