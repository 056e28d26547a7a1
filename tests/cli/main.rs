#![cfg(unix)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod report;

const BIN_NAME: &str = "gettext-stats";

/// Stand-in for msgfmt: echoes the catalog content to stderr, and fails when
/// the catalog contains `FAIL`. Also checks the invocation contract.
const FAKE_MSGFMT: &str = r#"#!/bin/sh
[ "$1" = "--statistics" ] || { echo "unexpected argument: $1" >&2; exit 3; }
[ "$LC_ALL" = "C" ] || { echo "LC_ALL not forced" >&2; exit 4; }
case "$2" in
  /*) ;;
  *) echo "path is not absolute: $2" >&2; exit 5 ;;
esac
cat "$2" >&2
if grep -q FAIL "$2"; then exit 1; fi
exit 0
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // keep config lookup inside the project
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// Project with a fake msgfmt and a config pointing at `po/`.
    pub fn with_fake_msgfmt() -> Result<Self> {
        let test = Self::new()?;
        let tool = test.write_executable("bin/fake-msgfmt", FAKE_MSGFMT)?;
        test.write_file(
            ".gettext-stats.json",
            &format!(
                r#"{{ "poDirectory": "po", "msgfmtCmd": "{}" }}"#,
                tool.display()
            ),
        )?;
        Ok(test)
    }

    /// Write a catalog whose "statistics" are `output`.
    pub fn write_catalog(&self, name: &str, output: &str) -> Result<()> {
        self.write_file(&format!("po/{}", name), output)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_executable(&self, path: &str, content: &str) -> Result<PathBuf> {
        self.write_file(path, content)?;
        let file_path = self.project_dir.join(path);
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o755))?;
        Ok(file_path)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path);
        }
        cmd
    }

    pub fn report_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("report");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run a command, returning (exit code, stdout, stderr).
pub fn run(mut cmd: Command) -> Result<(Option<i32>, String, String)> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().context("Failed to run gettext-stats")?;
    Ok((
        status.code(),
        String::from_utf8(stdout)?,
        String::from_utf8(stderr)?,
    ))
}
