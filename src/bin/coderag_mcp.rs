//! coderag MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes the RAG engine's indexing,
//! search and question answering as tools for MCP clients.

use coderag::core::config::Config;
use coderag::core::xdg::XdgDirs;
use coderag::mcp::McpServer;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // stdout carries the protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let xdg = XdgDirs::new();
    if let Err(e) = xdg.ensure_dirs_exist() {
        eprintln!("Failed to create XDG directories: {e}");
        std::process::exit(1);
    }
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    let mut server = McpServer::from_config(config).unwrap_or_else(|e| {
        eprintln!("Failed to start RAG engine: {e}");
        std::process::exit(1);
    });

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
