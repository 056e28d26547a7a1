use std::{io, path::Path};

use super::{CollectError, Stats};

/// Environment passed to every tool invocation so its diagnostics are in
/// English regardless of the host locale.
pub const FORCE_C_LOCALE: (&str, &str) = ("LC_ALL", "C");

/// Captured result of one tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(stderr: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs the statistics tool for one catalog file.
///
/// Both output streams must be fully captured before the exit status is
/// reported.
pub trait ToolRunner {
    /// Name used in log messages.
    fn program(&self) -> &str {
        "statistics tool"
    }

    fn run(&self, file: &Path, env: &[(&str, &str)]) -> io::Result<ToolOutput>;
}

impl<F> ToolRunner for F
where
    F: Fn(&Path) -> io::Result<ToolOutput>,
{
    fn run(&self, file: &Path, _env: &[(&str, &str)]) -> io::Result<ToolOutput> {
        self(file)
    }
}

/// Builds [`Stats`] by running a [`ToolRunner`] over catalog files, one at a time.
pub struct StatsCollector<R> {
    runner: R,
}

impl<R: ToolRunner> StatsCollector<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Collect statistics for `files`, in order.
    ///
    /// Never fails: files whose tool run fails are logged and recorded as
    /// skipped, and the batch continues.
    pub fn collect<P: AsRef<Path>>(&self, files: &[P]) -> Stats {
        let mut stats = Stats::new();

        for file in files {
            let file = file.as_ref();
            tracing::info!("Processing {}", file.display());

            let output = match self.runner.run(file, &[FORCE_C_LOCALE]) {
                Ok(output) => output,
                Err(source) => {
                    let err = CollectError::ToolLaunch {
                        program: self.runner.program().to_string(),
                        source,
                    };
                    tracing::error!(file = %file.display(), "{}", err);
                    stats.skip(file, err);
                    continue;
                }
            };

            if !output.is_success() {
                tracing::info!(file = %file.display(), "{}", output.stderr);
                stats.skip(
                    file,
                    CollectError::NonZeroExit {
                        program: self.runner.program().to_string(),
                        status: output.status,
                        stderr: output.stderr,
                    },
                );
                continue;
            }

            // msgfmt writes its statistics to stderr even on success
            stats.parse_output(file, &output.stderr);
        }

        tracing::debug!(
            collected = stats.len(),
            skipped = stats.skipped().len(),
            "Finished collecting statistics"
        );
        stats
    }
}
