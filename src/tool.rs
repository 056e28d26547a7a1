//! Subprocess runner for `msgfmt --statistics`.

use std::{io, path::Path, process::Command};

use crate::stats::{ToolOutput, ToolRunner};

pub const DEFAULT_MSGFMT: &str = "msgfmt";

/// Runs an msgfmt-compatible program as `<program> --statistics <absolute path>`.
#[derive(Debug, Clone)]
pub struct MsgfmtRunner {
    program: String,
}

impl MsgfmtRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, file: &Path, env: &[(&str, &str)]) -> io::Result<Command> {
        let mut cmd = Command::new(&self.program);
        cmd.envs(env.iter().copied());
        cmd.arg("--statistics");
        cmd.arg(std::path::absolute(file)?);
        Ok(cmd)
    }
}

impl Default for MsgfmtRunner {
    fn default() -> Self {
        Self::new(DEFAULT_MSGFMT)
    }
}

impl ToolRunner for MsgfmtRunner {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, file: &Path, env: &[(&str, &str)]) -> io::Result<ToolOutput> {
        let mut cmd = self.command(file, env)?;
        tracing::debug!(command = ?cmd, "Running statistics tool");

        // output() drains stdout and stderr before waiting on the child
        let output = cmd.output()?;

        Ok(ToolOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
