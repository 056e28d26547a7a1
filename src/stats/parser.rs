//! Extraction of message counts from `msgfmt --statistics` output.
//!
//! Typical lines (written to stderr by msgfmt):
//!
//! ```text
//! 117 translated messages.
//! 0 translated messages, 117 untranslated messages.
//! 92 translated messages, 5 fuzzy translations, 20 untranslated messages.
//! ```
//!
//! Each clause is matched independently, so separators and clause order do
//! not matter. Counts are ASCII digit runs that must fit in a `u32`.

use std::sync::LazyLock;

use regex::Regex;

use super::{CountField, ParseProblemKind, StatsEntry};

static TRANSLATED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+) translated messages?").unwrap());
static FUZZY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+) fuzzy translations?").unwrap());
static UNTRANSLATED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+) untranslated messages?").unwrap());

/// Parse tool output into a fresh entry for `file`.
///
/// Problems are logged and returned alongside the entry; they never prevent
/// the entry from being produced.
pub fn parse_output(
    file: impl Into<std::path::PathBuf>,
    output: &str,
) -> (StatsEntry, Vec<ParseProblemKind>) {
    let mut entry = StatsEntry::new(file);
    let problems = parse_into(&mut entry, output);
    (entry, problems)
}

pub(super) fn parse_into(entry: &mut StatsEntry, output: &str) -> Vec<ParseProblemKind> {
    let text = output.trim();
    let mut problems = Vec::new();

    match TRANSLATED_REGEX.captures(text) {
        Some(caps) => {
            apply(entry, CountField::Translated, &caps[1], &mut problems);
        }
        None => {
            tracing::error!(
                file = %entry.file().display(),
                "Could not parse statistic output: {}",
                output
            );
            problems.push(ParseProblemKind::MissingTranslated);
        }
    }

    if let Some(caps) = FUZZY_REGEX.captures(text) {
        apply(entry, CountField::Fuzzy, &caps[1], &mut problems);
    }

    if let Some(caps) = UNTRANSLATED_REGEX.captures(text) {
        apply(entry, CountField::Untranslated, &caps[1], &mut problems);
    }

    problems
}

fn apply(
    entry: &mut StatsEntry,
    field: CountField,
    token: &str,
    problems: &mut Vec<ParseProblemKind>,
) {
    match extract_number(token) {
        Some(value) => entry.set(field, value),
        None => {
            tracing::warn!(
                file = %entry.file().display(),
                "Could not extract {} count from: {}",
                field,
                token
            );
            problems.push(ParseProblemKind::MalformedNumber {
                field,
                token: token.to_string(),
            });
        }
    }
}

/// First whitespace-separated token of `token`, as a count.
fn extract_number(token: &str) -> Option<u32> {
    let first = token.split_whitespace().next()?;
    match first.parse::<u32>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::error!("Could not parse token \"{}\": {}", token, err);
            None
        }
    }
}
