//! Stdin processing for `gherkinfmt fmt -`

use colored::*;
use std::io::{self, Read, Write};

use gherkinfmt_lib::config::Config;
use gherkinfmt_lib::exit_codes::exit;
use gherkinfmt_lib::format_text;

use crate::file_processor::FmtMode;
use crate::formatter::{generate_diff, print_diff};

/// Format stdin. Formatted text goes to stdout in write mode; check and diff modes
/// exit with code 1 when the input is not formatted.
pub fn process_stdin(args: &crate::FmtArgs, config: &Config, mode: FmtMode) {
    let display_name = args.stdin_filename.as_deref().unwrap_or("<stdin>");

    let mut content = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut content) {
        eprintln!("{}: Failed to read from stdin: {}", "Error".red().bold(), e);
        exit::tool_error();
    }

    let formatted = match format_text(&content, config) {
        Ok(formatted) => formatted,
        Err(e) => {
            eprintln!("{}: {}: {}", "Error".red().bold(), display_name, e);
            exit::tool_error();
        }
    };

    match mode {
        FmtMode::Write => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(formatted.as_bytes()).and_then(|()| stdout.flush()) {
                eprintln!("{}: Failed to write to stdout: {}", "Error".red().bold(), e);
                exit::tool_error();
            }
        }
        FmtMode::Check => {
            if formatted != content {
                if !args.quiet {
                    eprintln!("Would reformat: {display_name}");
                }
                exit::unformatted();
            }
        }
        FmtMode::Diff => {
            if formatted != content {
                print_diff(&generate_diff(&content, &formatted, display_name));
                exit::unformatted();
            }
        }
    }
}
