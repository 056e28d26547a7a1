use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Why a catalog file produced no entry.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The tool could not be started or its output could not be captured.
    #[error("could not execute {program}: {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The tool ran but reported failure.
    #[error(
        "{program} exited with {status_text}: {stderr_text}",
        status_text = describe_status(*status),
        stderr_text = stderr.trim()
    )]
    NonZeroExit {
        program: String,
        status: Option<i32>,
        stderr: String,
    },
}

fn describe_status(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// A catalog file that was left out of the statistics.
#[derive(Debug)]
pub struct SkippedCatalog {
    pub file: PathBuf,
    pub reason: CollectError,
}

/// Count field of a statistics entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountField {
    Translated,
    Fuzzy,
    Untranslated,
}

impl fmt::Display for CountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountField::Translated => write!(f, "translated"),
            CountField::Fuzzy => write!(f, "fuzzy"),
            CountField::Untranslated => write!(f, "untranslated"),
        }
    }
}

/// Problem in the tool output of a catalog that was still kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseProblemKind {
    /// The mandatory translated clause was not found; `translated` stays 0.
    #[error("could not parse statistic output")]
    MissingTranslated,
    /// A matched number did not fit; the field stays 0.
    #[error("could not parse {field} count from \"{token}\"")]
    MalformedNumber { field: CountField, token: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProblem {
    pub file: PathBuf,
    pub kind: ParseProblemKind,
}
