//! JSON output for tooling.

use std::io::{self, Write};

use serde::Serialize;

use crate::stats::{SkippedCatalog, Stats, StatsEntry};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub catalogs: Vec<CatalogDto>,
    pub skipped: Vec<SkippedDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDto {
    pub locale: String,
    pub display_name: String,
    pub file: String,
    pub translated: u32,
    pub fuzzy: u32,
    pub untranslated: u32,
    pub total: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedDto {
    pub file: String,
    pub reason: String,
}

impl From<&StatsEntry> for CatalogDto {
    fn from(entry: &StatsEntry) -> Self {
        Self {
            locale: entry.locale().tag().to_string(),
            display_name: entry.locale().display_name(),
            file: entry.file().display().to_string(),
            translated: entry.translated(),
            fuzzy: entry.fuzzy(),
            untranslated: entry.untranslated(),
            total: entry.total(),
        }
    }
}

impl From<&SkippedCatalog> for SkippedDto {
    fn from(skipped: &SkippedCatalog) -> Self {
        Self {
            file: skipped.file.display().to_string(),
            reason: skipped.reason.to_string(),
        }
    }
}

impl From<&Stats> for ReportDto {
    fn from(stats: &Stats) -> Self {
        Self {
            catalogs: stats
                .sorted_items()
                .into_iter()
                .map(CatalogDto::from)
                .collect(),
            skipped: stats.skipped().iter().map(SkippedDto::from).collect(),
        }
    }
}

pub fn render_to<W: Write>(stats: &Stats, writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &ReportDto::from(stats))?;
    writeln!(writer)
}
