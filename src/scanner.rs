//! Discovery of catalog files under a directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning for catalog files.
#[derive(Debug)]
pub struct ScanResult {
    /// Matching files, in walk order (sorted by file name per directory).
    pub files: Vec<PathBuf>,
    /// Entries that could not be read.
    pub skipped_count: usize,
}

fn compile(patterns: &[String], what: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", what, p))
        })
        .collect()
}

/// Walk `root` and return files whose path relative to `root` matches one of
/// `includes` and none of `ignores`.
pub fn scan_catalogs(root: &Path, includes: &[String], ignores: &[String]) -> Result<ScanResult> {
    if !root.is_dir() {
        bail!("Catalog directory does not exist: {}", root.display());
    }

    let include_patterns = compile(includes, "includes")?;
    let ignore_patterns = compile(ignores, "ignores")?;

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                tracing::info!("Cannot access path: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);

        if ignore_patterns.iter().any(|p| p.matches_path(relative)) {
            tracing::debug!("Ignoring {}", relative.display());
            continue;
        }
        if include_patterns.iter().any(|p| p.matches_path(relative)) {
            files.push(path.to_path_buf());
        }
    }

    tracing::info!(
        "Found {} catalog file(s) in '{}'",
        files.len(),
        root.display()
    );

    Ok(ScanResult {
        files,
        skipped_count,
    })
}
