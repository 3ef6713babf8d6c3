//! Handler for the `fmt` command.

use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use gherkinfmt_lib::catalog::Language;
use gherkinfmt_lib::config::Config;
use gherkinfmt_lib::exit_codes::exit;

use crate::FmtArgs;
use crate::file_processor::{FmtMode, find_feature_files, process_files};
use crate::formatter::{RunSummary, print_diff, print_summary};
use crate::stdin_processor::process_stdin;

/// Directory that config-relative patterns are resolved against
fn project_root(config_file: &Path) -> Option<PathBuf> {
    let dir = config_file.parent()?;
    // .config/gherkinfmt.toml belongs to the directory above .config
    if dir.file_name().is_some_and(|name| name == ".config") {
        return dir.parent().map(Path::to_path_buf);
    }
    Some(dir.to_path_buf())
}

pub fn handle_fmt(args: &FmtArgs, config_path: Option<&str>, no_config: bool, verbose: bool) {
    let (mut config, config_file) = match Config::load_with_discovery(config_path, no_config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    if let Some(file) = &config_file {
        log::debug!("Using config file: {}", file.display());
    }

    if let Some(code) = &args.language {
        match code.parse::<Language>() {
            Ok(language) => config.global.language = language,
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                exit::tool_error();
            }
        }
    }

    let mode = FmtMode::from_args(args);

    if args.reads_stdin() {
        process_stdin(args, &config, mode);
        return;
    }

    let root = config_file.as_deref().and_then(project_root);
    let files = match find_feature_files(args, &config, root.as_deref()) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    if files.is_empty() {
        if !args.quiet {
            println!("No feature files found");
        }
        return;
    }

    let start = Instant::now();
    let results = process_files(&files, &config, mode);

    let mut summary = RunSummary {
        files_processed: files.len(),
        ..Default::default()
    };

    for result in results {
        match result {
            Ok(report) => {
                if !report.changed {
                    continue;
                }
                summary.files_changed += 1;
                if let Some(diff) = &report.diff {
                    print_diff(diff);
                } else if mode == FmtMode::Check && !args.quiet {
                    println!("Would reformat: {}", report.path);
                } else if verbose {
                    println!("Reformatted: {}", report.path);
                }
            }
            Err(e) => {
                summary.errors += 1;
                eprintln!("{}: {:#}", "Error".red().bold(), e);
            }
        }
    }

    summary.duration_ms = start.elapsed().as_millis() as u64;

    if !args.quiet {
        print_summary(&summary, mode);
    }

    if summary.errors > 0 {
        exit::tool_error();
    }
    if mode != FmtMode::Write && summary.files_changed > 0 {
        exit::unformatted();
    }
}
