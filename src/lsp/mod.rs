//! Language Server Protocol implementation for gherkinfmt
//!
//! Editors get whole-document formatting, live table alignment while typing `|`, and keyword
//! completion for the active language. Started with `gherkinfmt server`.

pub mod completion;
pub mod server;
pub mod types;

pub use server::{GherkinLanguageServer, TABLE_TRIGGER_CHARACTER};
pub use types::GherkinLspConfig;

use anyhow::Result;
use tokio::net::TcpListener;
use tower_lsp::{LspService, Server};

/// Start the Language Server Protocol server over stdio
pub async fn start_server(config_path: Option<&str>) -> Result<()> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| GherkinLanguageServer::new(client, config_path));

    log::info!("Starting gherkinfmt Language Server Protocol server");

    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}

/// Start the LSP server over TCP (useful for debugging)
pub async fn start_tcp_server(port: u16, config_path: Option<&str>) -> Result<()> {
    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await?;
    log::info!("gherkinfmt LSP server listening on 127.0.0.1:{port}");

    loop {
        let (stream, _) = listener.accept().await?;
        let (service, socket) = LspService::new(|client| GherkinLanguageServer::new(client, config_path));

        tokio::spawn(async move {
            let (read, write) = tokio::io::split(stream);
            Server::new(read, write, socket).serve(service).await;
        });
    }
}
