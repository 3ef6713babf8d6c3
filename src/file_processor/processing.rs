//! Formatting of individual files, sequentially or across a rayon pool.

use anyhow::{Context, Result};
use std::fs;

use gherkinfmt_lib::config::Config;
use gherkinfmt_lib::format_text;

use crate::formatter::generate_diff;

/// What `fmt` does with a file whose formatting changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmtMode {
    /// Rewrite the file in place
    Write,
    /// Report the file without touching it
    Check,
    /// Print a diff without touching the file
    Diff,
}

impl FmtMode {
    pub fn from_args(args: &crate::FmtArgs) -> Self {
        if args.diff {
            FmtMode::Diff
        } else if args.check {
            FmtMode::Check
        } else {
            FmtMode::Write
        }
    }
}

/// Result of formatting one file
#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    /// Formatting changes the file's content
    pub changed: bool,
    /// Unified diff, in [`FmtMode::Diff`] only
    pub diff: Option<String>,
}

/// Format one file according to `mode`.
pub fn format_file(path: &str, config: &Config, mode: FmtMode) -> Result<FileReport> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let formatted = format_text(&content, config).with_context(|| format!("Failed to format {path}"))?;
    let changed = formatted != content;

    let mut diff = None;
    if changed {
        match mode {
            FmtMode::Write => {
                fs::write(path, &formatted).with_context(|| format!("Failed to write {path}"))?;
                log::debug!("Reformatted {path}");
            }
            FmtMode::Check => log::debug!("Would reformat {path}"),
            FmtMode::Diff => diff = Some(generate_diff(&content, &formatted, path)),
        }
    }

    Ok(FileReport {
        path: path.to_string(),
        changed,
        diff,
    })
}

/// Format every file, in parallel when the `parallel` feature is enabled.
/// Results come back in the order of `files`.
pub fn process_files(files: &[String], config: &Config, mode: FmtMode) -> Vec<Result<FileReport>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        files.par_iter().map(|path| format_file(path, config, mode)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        files.iter().map(|path| format_file(path, config, mode)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MESSY: &str = "Feature: f\nScenario: s\nGiven x\n";
    const CLEAN: &str = "Feature: f\n\tScenario: s\n\t\tGiven x\n";

    #[test]
    fn test_write_mode_rewrites_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("a.feature");
        fs::write(&path, MESSY).unwrap();
        let path = path.to_string_lossy().to_string();

        let report = format_file(&path, &Config::default(), FmtMode::Write).unwrap();
        assert!(report.changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), CLEAN);

        let report = format_file(&path, &Config::default(), FmtMode::Write).unwrap();
        assert!(!report.changed);
    }

    #[test]
    fn test_check_and_diff_modes_leave_file_alone() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("a.feature");
        fs::write(&path, MESSY).unwrap();
        let path = path.to_string_lossy().to_string();

        let report = format_file(&path, &Config::default(), FmtMode::Check).unwrap();
        assert!(report.changed);
        assert!(report.diff.is_none());

        let report = format_file(&path, &Config::default(), FmtMode::Diff).unwrap();
        assert!(report.diff.unwrap().contains("+\tScenario: s"));
        assert_eq!(fs::read_to_string(&path).unwrap(), MESSY);
    }

    #[test]
    fn test_process_files_keeps_order_and_errors() {
        let temp_dir = tempdir().unwrap();
        let good = temp_dir.path().join("good.feature");
        fs::write(&good, CLEAN).unwrap();
        let missing = temp_dir.path().join("missing.feature");
        let files = vec![good.to_string_lossy().to_string(), missing.to_string_lossy().to_string()];

        let results = process_files(&files, &Config::default(), FmtMode::Check);
        assert_eq!(results.len(), 2);
        assert!(!results[0].as_ref().unwrap().changed);
        assert!(results[1].is_err());
    }
}
