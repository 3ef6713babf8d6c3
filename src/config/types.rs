use serde::{Deserialize, Serialize};
use std::io;

use crate::catalog::{CatalogError, KeywordCatalog, Language, detect_language_header, resolve_catalog, resolve_catalog_code};
use crate::format::{FormatOptions, IndentStyle};
use crate::types::IndentSize;

/// Represents the complete configuration loaded from gherkinfmt.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Indentation unit as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyleName {
    #[default]
    #[serde(alias = "tabs")]
    Tab,
    #[serde(alias = "spaces")]
    Space,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GlobalConfig {
    /// Keyword language used when a file declares none
    pub language: Language,

    /// Let a leading `# language: xx` comment override `language`
    #[serde(alias = "language_header")]
    pub language_header: bool,

    /// Indent with tabs or spaces
    #[serde(alias = "indent_style")]
    pub indent_style: IndentStyleName,

    /// Spaces per level when `indent-style = "space"`
    #[serde(alias = "indent_width")]
    pub indent_width: IndentSize,

    /// Align data tables attached to steps, not only Examples tables
    #[serde(alias = "data_tables")]
    pub data_tables: bool,

    /// Files to include
    pub include: Vec<String>,

    /// Files to exclude
    pub exclude: Vec<String>,

    /// Respect .gitignore files when scanning directories
    #[serde(alias = "respect_gitignore")]
    pub respect_gitignore: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            language_header: true,
            indent_style: IndentStyleName::Tab,
            indent_width: IndentSize::default(),
            data_tables: false,
            include: Vec::new(),
            exclude: Vec::new(),
            respect_gitignore: true,
        }
    }
}

impl Config {
    pub fn format_options(&self) -> FormatOptions {
        let indent = match self.global.indent_style {
            IndentStyleName::Tab => IndentStyle::Tab,
            IndentStyleName::Space => IndentStyle::Spaces(self.global.indent_width),
        };
        FormatOptions {
            indent,
            data_tables: self.global.data_tables,
        }
    }

    /// Catalog to format `lines` with: the declared `# language:` header when enabled and
    /// present, otherwise the configured language.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidLanguage`] when the header names an unsupported language.
    pub fn catalog_for<S: AsRef<str>>(&self, lines: &[S]) -> Result<&'static KeywordCatalog, CatalogError> {
        if self.global.language_header
            && let Some(code) = detect_language_header(lines)
        {
            log::debug!("Using language '{code}' declared by header");
            return resolve_catalog_code(code);
        }
        Ok(resolve_catalog(self.global.language))
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}
