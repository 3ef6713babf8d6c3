//! Output formatting and display utilities

use colored::*;

use crate::file_processor::FmtMode;

/// Counters reported at the end of a `fmt` run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_changed: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// Print summary of a formatting run
pub fn print_summary(summary: &RunSummary, mode: FmtMode) {
    let file_text = if summary.files_processed == 1 { "file" } else { "files" };
    let changed_text = if summary.files_changed == 1 { "file" } else { "files" };

    if summary.errors > 0 {
        println!(
            "\n{} {} of {} {} could not be formatted ({}ms)",
            "Error:".red().bold(),
            summary.errors,
            summary.files_processed,
            file_text,
            summary.duration_ms
        );
    }

    if summary.files_changed == 0 {
        println!(
            "\n{} {} {} already formatted ({}ms)",
            "Success:".green().bold(),
            summary.files_processed - summary.errors,
            file_text,
            summary.duration_ms
        );
        return;
    }

    match mode {
        FmtMode::Write => println!(
            "\n{} Reformatted {} {} ({}ms)",
            "Fixed:".green().bold(),
            summary.files_changed,
            changed_text,
            summary.duration_ms
        ),
        FmtMode::Check | FmtMode::Diff => {
            println!(
                "\n{} {} {} would be reformatted ({}ms)",
                "Unformatted:".yellow(),
                summary.files_changed,
                changed_text,
                summary.duration_ms
            );
            println!("Run `gherkinfmt fmt` to format them");
        }
    }
}

/// Print a diff produced by [`generate_diff`], coloring removed and added lines
pub fn print_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("---") || line.starts_with("+++") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}

/// Generate a unified diff between original and formatted content.
///
/// Formatting never adds or removes lines, so lines are compared pairwise and every run of
/// changed lines becomes one hunk with up to three lines of context.
pub fn generate_diff(original: &str, modified: &str, file_path: &str) -> String {
    let mut diff = String::new();

    diff.push_str(&format!("--- {file_path}\n"));
    diff.push_str(&format!("+++ {file_path} (formatted)\n"));

    let original_lines: Vec<&str> = original.lines().collect();
    let modified_lines: Vec<&str> = modified.lines().collect();

    let max_lines = original_lines.len().max(modified_lines.len());
    let mut hunks: Vec<(usize, usize)> = Vec::new();
    let mut start_of_change: Option<usize> = None;

    for i in 0..max_lines {
        let orig_line = original_lines.get(i).copied().unwrap_or("");
        let mod_line = modified_lines.get(i).copied().unwrap_or("");

        if orig_line != mod_line {
            start_of_change.get_or_insert(i);
        } else if let Some(first) = start_of_change.take() {
            push_hunk(&mut hunks, first.saturating_sub(3), (i + 3).min(max_lines));
        }
    }
    if let Some(first) = start_of_change {
        push_hunk(&mut hunks, first.saturating_sub(3), max_lines);
    }

    // Only carriage returns differ
    if hunks.is_empty() && original != modified {
        diff.push_str("\\ line endings normalized\n");
    }

    for (start, end) in hunks {
        diff.push_str(&format!(
            "@@ -{},{} +{},{} @@\n",
            start + 1,
            end - start,
            start + 1,
            end - start
        ));

        for i in start..end {
            let orig_line = original_lines.get(i).copied();
            let mod_line = modified_lines.get(i).copied();

            match (orig_line, mod_line) {
                (Some(o), Some(m)) if o == m => diff.push_str(&format!(" {o}\n")),
                (o, m) => {
                    if let Some(o) = o {
                        diff.push_str(&format!("-{o}\n"));
                    }
                    if let Some(m) = m {
                        diff.push_str(&format!("+{m}\n"));
                    }
                }
            }
        }
    }

    diff
}

/// Append a hunk, merging it into the previous one when their context overlaps
fn push_hunk(hunks: &mut Vec<(usize, usize)>, start: usize, end: usize) {
    match hunks.last_mut() {
        Some((_, last_end)) if start <= *last_end => *last_end = end,
        _ => hunks.push((start, end)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_of_identical_content_has_no_hunks() {
        let diff = generate_diff("a\nb\n", "a\nb\n", "x.feature");
        assert_eq!(diff, "--- x.feature\n+++ x.feature (formatted)\n");
    }

    #[test]
    fn test_diff_single_change_with_context() {
        let original = "Feature: f\nScenario: s\nGiven x\n";
        let modified = "Feature: f\n\tScenario: s\n\t\tGiven x\n";
        let diff = generate_diff(original, modified, "x.feature");
        assert_eq!(
            diff,
            "--- x.feature\n+++ x.feature (formatted)\n\
             @@ -1,3 +1,3 @@\n \
             Feature: f\n\
             -Scenario: s\n\
             +\tScenario: s\n\
             -Given x\n\
             +\t\tGiven x\n"
        );
    }

    #[test]
    fn test_overlapping_hunks_are_merged() {
        let original = "a\nB\nc\nd\nE\nf\n";
        let modified = "a\nb\nc\nd\ne\nf\n";
        let diff = generate_diff(original, modified, "x");
        assert_eq!(diff.matches("@@").count(), 2);
    }

    #[test]
    fn test_diff_notes_line_ending_only_changes() {
        let diff = generate_diff("a\r\nb\n", "a\nb\n", "x.feature");
        assert_eq!(
            diff,
            "--- x.feature\n+++ x.feature (formatted)\n\\ line endings normalized\n"
        );
    }
}
