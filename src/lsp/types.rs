//! LSP type definitions and utilities for gherkinfmt

use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::*;

/// Client-side settings, from `initializationOptions` or `workspace/didChangeConfiguration`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GherkinLspConfig {
    /// Path to a gherkinfmt configuration file
    pub config_path: Option<String>,
    /// Keyword language code, overriding the configuration file
    pub language: Option<String>,
    /// Enable/disable document formatting
    pub enable_formatting: bool,
    /// Enable/disable table realignment while typing `|`
    pub format_on_type: bool,
}

impl Default for GherkinLspConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            language: None,
            enable_formatting: true,
            format_on_type: true,
        }
    }
}

impl GherkinLspConfig {
    /// Accept settings either as a bare object or nested under a `gherkinfmt` key.
    pub fn from_settings(settings: serde_json::Value) -> Option<Self> {
        let settings = match settings {
            serde_json::Value::Object(mut map) if map.contains_key("gherkinfmt") => map.remove("gherkinfmt")?,
            other => other,
        };
        serde_json::from_value(settings).ok()
    }
}

/// Range covering the whole of `text`, in UTF-16 positions.
pub fn full_document_range(text: &str) -> Range {
    let last_line = text.matches('\n').count() as u32;
    let tail = text.rsplit('\n').next().unwrap_or("");
    Range {
        start: Position { line: 0, character: 0 },
        end: Position {
            line: last_line,
            character: tail.encode_utf16().count() as u32,
        },
    }
}

/// Single edit replacing the whole document, or `None` when nothing changes.
pub fn full_document_edit(original: &str, formatted: String) -> Option<TextEdit> {
    if original == formatted {
        return None;
    }
    Some(TextEdit {
        range: full_document_range(original),
        new_text: formatted,
    })
}

/// Text of `line` before the UTF-16 offset `character`.
pub fn line_prefix(line: &str, character: u32) -> &str {
    let mut units = 0u32;
    for (offset, c) in line.char_indices() {
        if units >= character {
            return &line[..offset];
        }
        units += c.len_utf16() as u32;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document_range() {
        let range = full_document_range("Feature: a\n\tScenario: é\n");
        assert_eq!(range.end, Position { line: 2, character: 0 });

        let range = full_document_range("Feature: a\nScénario");
        assert_eq!(range.end, Position { line: 1, character: 8 });

        assert_eq!(full_document_range("").end, Position { line: 0, character: 0 });
    }

    #[test]
    fn test_full_document_edit_skips_noop() {
        assert!(full_document_edit("Feature: a", "Feature: a".to_string()).is_none());
        let edit = full_document_edit("Scenario: a", "\tScenario: a".to_string()).unwrap();
        assert_eq!(edit.new_text, "\tScenario: a");
        assert_eq!(edit.range.end, Position { line: 0, character: 11 });
    }

    #[test]
    fn test_line_prefix_counts_utf16() {
        assert_eq!(line_prefix("Étant donné", 5), "Étant");
        assert_eq!(line_prefix("abc", 10), "abc");
        assert_eq!(line_prefix("a😀b", 3), "a😀");
    }

    #[test]
    fn test_settings_nested_or_bare() {
        let nested = serde_json::json!({ "gherkinfmt": { "language": "fr" } });
        assert_eq!(
            GherkinLspConfig::from_settings(nested).unwrap().language.as_deref(),
            Some("fr")
        );
        let bare = serde_json::json!({ "formatOnType": false });
        let config = GherkinLspConfig::from_settings(bare).unwrap();
        assert!(!config.format_on_type);
        assert!(config.enable_formatting);
    }
}
