//! Main Language Server Protocol server implementation for gherkinfmt
//!
//! The server keeps open documents in memory and answers formatting requests with a single
//! edit replacing the whole document. Typing `|` inside a table triggers on-type formatting so
//! Examples tables are realigned live.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result as JsonRpcResult;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::catalog::{KeywordCatalog, Language, resolve_catalog};
use crate::config::Config;
use crate::format::format_document;
use crate::lsp::types::{GherkinLspConfig, full_document_edit};

/// Character that triggers on-type formatting
pub const TABLE_TRIGGER_CHARACTER: &str = "|";

/// Main LSP server for gherkinfmt
pub struct GherkinLanguageServer {
    pub(super) client: Client,
    /// Client-side settings
    pub(super) config: Arc<RwLock<GherkinLspConfig>>,
    /// Formatter configuration, including the selected keyword language
    pub(super) format_config: Arc<RwLock<Config>>,
    /// Document store for open files
    pub(super) documents: Arc<RwLock<HashMap<Url, String>>>,
}

impl GherkinLanguageServer {
    pub fn new(client: Client, config_path: Option<&str>) -> Self {
        let format_config = match config_path {
            Some(path) => match Config::load_file(std::path::Path::new(path)) {
                Ok(config) => {
                    log::info!("Loaded gherkinfmt config from: {path}");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to load config from {path}: {e}");
                    Config::default()
                }
            },
            None => Config::default(),
        };

        Self {
            client,
            config: Arc::new(RwLock::new(GherkinLspConfig::default())),
            format_config: Arc::new(RwLock::new(format_config)),
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Apply client settings. An unknown language code keeps the current selection.
    async fn apply_settings(&self, settings: GherkinLspConfig) {
        if let Some(path) = &settings.config_path {
            match Config::load_file(std::path::Path::new(path)) {
                Ok(config) => {
                    *self.format_config.write().await = config;
                    log::info!("Loaded gherkinfmt config from: {path}");
                }
                Err(e) => log::warn!("Failed to load config from {path}: {e}"),
            }
        }

        if let Some(code) = &settings.language {
            match code.parse::<Language>() {
                Ok(language) => {
                    self.format_config.write().await.global.language = language;
                    log::info!("Keyword language set to {}", language.name());
                }
                Err(e) => log::warn!("{e}; keeping the current language"),
            }
        }

        *self.config.write().await = settings;
    }

    /// Catalog for `text`, falling back to the configured language when the document
    /// declares an unsupported one.
    pub(super) async fn catalog_for(&self, text: &str) -> &'static KeywordCatalog {
        let config = self.format_config.read().await;
        let lines: Vec<&str> = text.lines().collect();
        match config.catalog_for(&lines) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("{e}; using {}", config.global.language.name());
                resolve_catalog(config.global.language)
            }
        }
    }

    /// Format a stored document, reading the language selection once.
    async fn format_edits(&self, uri: &Url) -> Option<Vec<TextEdit>> {
        let text = self.documents.read().await.get(uri).cloned()?;

        let catalog = self.catalog_for(&text).await;
        let options = self.format_config.read().await.format_options();
        let formatted = format_document(&text, catalog, options);

        Some(full_document_edit(&text, formatted).into_iter().collect())
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for GherkinLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> JsonRpcResult<InitializeResult> {
        log::info!("Initializing gherkinfmt Language Server");

        if let Some(options) = params.initialization_options
            && let Some(settings) = GherkinLspConfig::from_settings(options)
        {
            self.apply_settings(settings).await;
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                document_formatting_provider: Some(OneOf::Left(true)),
                document_on_type_formatting_provider: Some(DocumentOnTypeFormattingOptions {
                    first_trigger_character: TABLE_TRIGGER_CHARACTER.to_string(),
                    more_trigger_character: None,
                }),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec!["<".to_string()]),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "gherkinfmt".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        log::info!("gherkinfmt Language Server initialized");

        self.client
            .log_message(MessageType::INFO, "gherkinfmt Language Server started")
            .await;
    }

    async fn shutdown(&self) -> JsonRpcResult<()> {
        log::info!("Shutting down gherkinfmt Language Server");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.documents
            .write()
            .await
            .insert(params.text_document.uri, params.text_document.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // FULL sync: the last change carries the whole text
        if let Some(change) = params.content_changes.into_iter().last() {
            self.documents
                .write()
                .await
                .insert(params.text_document.uri, change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.write().await.remove(&params.text_document.uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        match GherkinLspConfig::from_settings(params.settings) {
            Some(settings) => self.apply_settings(settings).await,
            None => log::warn!("Ignoring unrecognized configuration change"),
        }
    }

    async fn formatting(&self, params: DocumentFormattingParams) -> JsonRpcResult<Option<Vec<TextEdit>>> {
        if !self.config.read().await.enable_formatting {
            return Ok(None);
        }
        Ok(self.format_edits(&params.text_document.uri).await)
    }

    async fn on_type_formatting(
        &self,
        params: DocumentOnTypeFormattingParams,
    ) -> JsonRpcResult<Option<Vec<TextEdit>>> {
        let settings = self.config.read().await;
        if !settings.enable_formatting || !settings.format_on_type || params.ch != TABLE_TRIGGER_CHARACTER {
            return Ok(None);
        }
        drop(settings);

        Ok(self.format_edits(&params.text_document_position.text_document.uri).await)
    }

    async fn completion(&self, params: CompletionParams) -> JsonRpcResult<Option<CompletionResponse>> {
        let position = params.text_document_position.position;
        let uri = params.text_document_position.text_document.uri;

        let Some(text) = self.documents.read().await.get(&uri).cloned() else {
            return Ok(None);
        };

        let catalog = self.catalog_for(&text).await;
        let items = Self::completion_items(catalog, &text, position);
        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(CompletionResponse::Array(items)))
        }
    }
}
