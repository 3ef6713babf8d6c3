use regex::Regex;
use std::sync::LazyLock;

use crate::utils::BOM;

static LANGUAGE_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\s*language\s*:\s*([A-Za-z][\w-]*)\s*$").unwrap());

/// Language code declared by a `# language: xx` header.
///
/// Only the first non-blank line is inspected; the header is ignored anywhere else. A
/// byte-order mark before the header is skipped.
pub fn detect_language_header<S: AsRef<str>>(lines: &[S]) -> Option<&str> {
    let first = lines
        .iter()
        .map(|line| line.as_ref().trim_start_matches(BOM))
        .find(|line| !line.trim().is_empty())?;
    LANGUAGE_HEADER_RE
        .captures(first)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
