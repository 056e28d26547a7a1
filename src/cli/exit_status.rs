use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Report produced
/// - `Failure` (1): Report produced, but `--strict` was given and some catalogs
///   were skipped or had unparseable statistics
/// - `Error` (2): Command failed (config error, missing directory, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Report produced.
    Success,
    /// Report produced with incomplete statistics under `--strict`.
    Failure,
    /// Command failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
