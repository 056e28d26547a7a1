//! Statistics aggregate for a batch of catalog files.
//!
//! ## Module Structure
//!
//! - `collector`: runs the statistics tool per file and builds [`Stats`]
//! - `parser`: extracts counts from the tool's diagnostic text
//! - `error`: per-file problems (all non-fatal to a batch)

mod collector;
mod error;
mod parser;

use std::path::{Path, PathBuf};

pub use collector::{FORCE_C_LOCALE, StatsCollector, ToolOutput, ToolRunner};
pub use error::{CollectError, CountField, ParseProblem, ParseProblemKind, SkippedCatalog};
pub use parser::parse_output;

use crate::locale::{self, Locale};

/// Counts for one catalog file.
///
/// Created right before its tool output is parsed; the counts are written
/// only by the parser and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsEntry {
    file: PathBuf,
    locale: Locale,
    translated: u32,
    fuzzy: u32,
    untranslated: u32,
}

impl StatsEntry {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let locale = locale::resolve(&file);
        Self {
            file,
            locale,
            translated: 0,
            fuzzy: 0,
            untranslated: 0,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn translated(&self) -> u32 {
        self.translated
    }

    pub fn fuzzy(&self) -> u32 {
        self.fuzzy
    }

    pub fn untranslated(&self) -> u32 {
        self.untranslated
    }

    /// Sum of all three counts, widened so it cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.translated) + u64::from(self.fuzzy) + u64::from(self.untranslated)
    }

    fn set(&mut self, field: CountField, value: u32) {
        match field {
            CountField::Translated => self.translated = value,
            CountField::Fuzzy => self.fuzzy = value,
            CountField::Untranslated => self.untranslated = value,
        }
    }
}

/// Entries in file-processing order, plus the files that produced no entry.
#[derive(Debug, Default)]
pub struct Stats {
    items: Vec<StatsEntry>,
    skipped: Vec<SkippedCatalog>,
    problems: Vec<ParseProblem>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[StatsEntry] {
        &self.items
    }

    /// Entries ordered by locale display name.
    ///
    /// The sort is stable: entries with the same display name keep their
    /// insertion order. The aggregate itself is left untouched.
    pub fn sorted_items(&self) -> Vec<&StatsEntry> {
        let mut keyed: Vec<(String, &StatsEntry)> = self
            .items
            .iter()
            .map(|entry| (entry.locale().display_name(), entry))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        keyed.into_iter().map(|(_, entry)| entry).collect()
    }

    /// Files for which the tool could not be run or reported failure.
    pub fn skipped(&self) -> &[SkippedCatalog] {
        &self.skipped
    }

    /// Problems found while parsing tool output of entries that were kept.
    pub fn problems(&self) -> &[ParseProblem] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when every file produced a cleanly parsed entry.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.problems.is_empty()
    }

    /// Parse `output` for `file` and append the resulting entry.
    pub fn parse_output(&mut self, file: &Path, output: &str) {
        let mut entry = StatsEntry::new(file);
        for kind in parser::parse_into(&mut entry, output) {
            self.problems.push(ParseProblem {
                file: file.to_path_buf(),
                kind,
            });
        }
        self.items.push(entry);
    }

    pub(crate) fn skip(&mut self, file: &Path, reason: CollectError) {
        self.skipped.push(SkippedCatalog {
            file: file.to_path_buf(),
            reason,
        });
    }
}
