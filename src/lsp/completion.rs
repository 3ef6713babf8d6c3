//! Completion for the LSP server
//!
//! Offers the active catalog's keywords at the start of a line, and the `<parameter>` names
//! declared by Examples header rows when the cursor follows an unclosed `<`.

use std::collections::BTreeSet;

use tower_lsp::lsp_types::*;

use crate::catalog::{GherkinRole, KeywordCatalog, RoleKind};
use crate::format::normalize_line;
use crate::format::table::split_cells;

use super::server::GherkinLanguageServer;
use super::types::line_prefix;

impl GherkinLanguageServer {
    pub(super) fn completion_items(catalog: &KeywordCatalog, text: &str, position: Position) -> Vec<CompletionItem> {
        let Some(line) = text.lines().nth(position.line as usize) else {
            return Vec::new();
        };
        let prefix = line_prefix(line, position.character);

        if let Some(open) = prefix.rfind('<')
            && !prefix[open..].contains('>')
        {
            let typed = &prefix[open + 1..];
            return Self::parameter_names(catalog, text)
                .into_iter()
                .filter(|name| name.starts_with(typed))
                .map(|name| CompletionItem {
                    label: name.clone(),
                    kind: Some(CompletionItemKind::VARIABLE),
                    detail: Some("Examples parameter".to_string()),
                    insert_text: Some(format!("{name}>")),
                    ..Default::default()
                })
                .collect();
        }

        let typed = prefix.trim_start();
        if typed.contains(char::is_whitespace) && !typed.ends_with(char::is_whitespace) {
            // Past the keyword position; only complete multi-word keywords being typed
            if !catalog.keywords().any(|(_, keyword)| keyword.starts_with(typed)) {
                return Vec::new();
            }
        }

        catalog
            .keywords()
            .filter(|(role, keyword)| role.kind() != RoleKind::Marker && keyword.starts_with(typed))
            .map(|(role, keyword)| Self::keyword_item(role, keyword))
            .collect()
    }

    fn keyword_item(role: GherkinRole, keyword: &str) -> CompletionItem {
        let insert_text = match role.kind() {
            RoleKind::Block => format!("{keyword}: "),
            _ if keyword.ends_with('\'') => keyword.to_string(),
            _ => format!("{keyword} "),
        };
        CompletionItem {
            label: keyword.to_string(),
            kind: Some(CompletionItemKind::KEYWORD),
            detail: Some(format!("{role} keyword")),
            insert_text: Some(insert_text),
            ..Default::default()
        }
    }

    /// Parameter names declared by Examples header rows or already used in steps.
    pub(super) fn parameter_names(catalog: &KeywordCatalog, text: &str) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        let mut expecting_header = false;

        for raw in text.lines() {
            let line = normalize_line(raw);
            if line.is_empty() {
                continue;
            }

            match catalog.classify(&line) {
                Some(GherkinRole::Examples) => {
                    expecting_header = true;
                    continue;
                }
                Some(GherkinRole::Comment) => continue,
                _ => {}
            }

            if expecting_header && line.contains('|') {
                names.extend(split_cells(&line).into_iter().filter(|cell| !cell.is_empty()));
            }
            expecting_header = false;

            names.extend(catalog.parameters(&line).map(str::to_string));
        }

        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Language, resolve_catalog};

    const OUTLINE: &str = "Scenario Outline: login\n\
        Given <user> logs in\n\
        Examples:\n\
        | user | password |\n\
        | john | secret |\n\
        Given <";

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|item| item.label.as_str()).collect()
    }

    #[test]
    fn test_parameter_names() {
        let catalog = resolve_catalog(Language::English);
        let names = GherkinLanguageServer::parameter_names(catalog, OUTLINE);
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["password", "user"]);
    }

    #[test]
    fn test_parameter_completion_after_open_bracket() {
        let catalog = resolve_catalog(Language::English);
        let items = GherkinLanguageServer::completion_items(catalog, OUTLINE, Position { line: 5, character: 7 });
        assert_eq!(labels(&items), vec!["password", "user"]);
        assert_eq!(items[0].insert_text.as_deref(), Some("password>"));
    }

    #[test]
    fn test_keyword_completion_at_line_start() {
        let catalog = resolve_catalog(Language::English);
        let text = "Feature: f\n  Sc";
        let items = GherkinLanguageServer::completion_items(catalog, text, Position { line: 1, character: 4 });
        let labels = labels(&items);
        assert!(labels.contains(&"Scenario"));
        assert!(labels.contains(&"Scenario Outline"));
        assert!(labels.contains(&"Scenarios"));
        assert!(!labels.contains(&"Given"));

        let outline = items.iter().find(|i| i.label == "Scenario Outline").unwrap();
        assert_eq!(outline.insert_text.as_deref(), Some("Scenario Outline: "));
    }

    #[test]
    fn test_no_keyword_completion_mid_sentence() {
        let catalog = resolve_catalog(Language::English);
        let text = "Given the user";
        let items = GherkinLanguageServer::completion_items(catalog, text, Position { line: 0, character: 14 });
        assert!(items.is_empty());
    }

    #[test]
    fn test_french_elision_keyword() {
        let catalog = resolve_catalog(Language::French);
        let items = GherkinLanguageServer::completion_items(catalog, "Lorsq", Position { line: 0, character: 5 });
        let item = items.iter().find(|i| i.label == "Lorsqu'").unwrap();
        assert_eq!(item.insert_text.as_deref(), Some("Lorsqu'"));
        assert_eq!(labels(&items), vec!["Lorsque", "Lorsqu'"]);
    }
}
