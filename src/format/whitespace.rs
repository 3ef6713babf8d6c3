//! Whitespace normalization applied to every line before classification.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}|[^\S ]").unwrap());

/// Collapse every run of whitespace into a single space.
///
/// Leading and trailing runs become one space rather than disappearing, so
/// `"  toto titi    tutu   "` becomes `" toto titi tutu "`.
pub fn remove_multiple_spaces(line: &str) -> Cow<'_, str> {
    WHITESPACE_RUN_RE.replace_all(line, " ")
}

/// Trim, then collapse internal whitespace runs.
pub fn normalize_line(line: &str) -> String {
    remove_multiple_spaces(line.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_multiple_spaces() {
        assert_eq!(remove_multiple_spaces("  toto titi    tutu   "), " toto titi tutu ");
    }

    #[test]
    fn test_remove_multiple_spaces_mixed_whitespace() {
        assert_eq!(remove_multiple_spaces("a\t\t b\u{a0}\u{a0}c"), "a b c");
    }

    #[test]
    fn test_remove_multiple_spaces_borrows_when_clean() {
        assert!(matches!(remove_multiple_spaces("Given a step"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line("\t\tGiven   I   wait  "), "Given I wait");
        assert_eq!(normalize_line("   "), "");
    }
}
