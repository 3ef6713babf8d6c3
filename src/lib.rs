pub mod catalog;
pub mod config;
pub mod exit_codes;
pub mod format;
pub mod init;
pub mod lsp;
pub mod types;
pub mod utils;

pub use catalog::{CatalogError, GherkinRole, KeywordCatalog, Language, resolve_catalog, resolve_catalog_code};
pub use config::Config;
pub use format::{FormatOptions, IndentStyle, LineFormatter, format_document, format_lines};

/// Format a whole feature file with the catalog and options selected by `config`.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidLanguage`] when the file declares an unsupported
/// `# language:` header and headers are honored.
pub fn format_text(content: &str, config: &Config) -> Result<String, CatalogError> {
    let lines: Vec<&str> = content.lines().collect();
    let catalog = config.catalog_for(&lines)?;
    Ok(format_document(content, catalog, config.format_options()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text_uses_header_language() {
        let config = Config::default();
        let formatted = format_text("# language: fr\nFonctionnalité: Calcul\nScénario: somme\nSoit 1\n", &config).unwrap();
        assert_eq!(formatted, "# language: fr\nFonctionnalité: Calcul\n\tScénario: somme\n\t\tSoit 1\n");
    }

    #[test]
    fn test_format_text_rejects_unknown_header() {
        let config = Config::default();
        let err = format_text("# language: xx\nFeature: f\n", &config).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidLanguage(ref code) if code == "xx"));
    }

    #[test]
    fn test_format_text_reads_header_after_byte_order_mark() {
        let config = Config::default();
        let formatted = format_text(
            "\u{feff}# language: fr\nFonctionnalité: Calcul\nScénario: somme\nSoit 1\n",
            &config,
        )
        .unwrap();
        assert_eq!(
            formatted,
            "\u{feff}# language: fr\nFonctionnalité: Calcul\n\tScénario: somme\n\t\tSoit 1\n"
        );
    }
}
