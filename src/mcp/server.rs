//! MCP server implementation

use crate::core::config::Config;
use crate::core::services::RagEngine;
use crate::mcp::error::McpError;
use crate::mcp::handlers::{error_response, ProtocolHandlers};
use crate::mcp::protocol::*;
use crate::mcp::transport::StdioTransport;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info};

pub struct McpServer {
    transport: StdioTransport,
    handlers: Arc<ProtocolHandlers>,
}

impl McpServer {
    pub fn new(engine: Arc<RagEngine>) -> Self {
        Self {
            transport: StdioTransport::new(),
            handlers: Arc::new(ProtocolHandlers::new(engine)),
        }
    }

    /// Build the engine from configuration and wrap it in a server
    pub fn from_config(config: Config) -> Result<Self, McpError> {
        let engine = RagEngine::new(config)?;
        Ok(Self::new(Arc::new(engine)))
    }

    /// Run the MCP server until stdin closes or Ctrl+C
    pub async fn run(&mut self) -> Result<(), McpError> {
        info!("Starting coderag MCP server");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin).lines();

        let mut shutdown = tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
        });

        loop {
            tokio::select! {
                line = reader.next_line() => {
                    match line? {
                        Some(line) if !line.trim().is_empty() => {
                            self.process_and_respond(&line).await?;
                        }
                        None => break, // EOF
                        _ => continue,
                    }
                }

                _ = &mut shutdown => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        info!("MCP server shutting down");
        Ok(())
    }

    async fn process_and_respond(&mut self, line: &str) -> Result<(), McpError> {
        debug!("Received: {}", line);

        let response = match process_message(&self.handlers, line).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error processing message: {}", e);
                let (code, message) = e.to_code_and_message();
                error_response(None, code, message)
            }
        };
        self.transport.send_response(response).await
    }
}

/// Parse one JSON-RPC line and route it to its method handler
pub async fn process_message(
    handlers: &ProtocolHandlers,
    line: &str,
) -> Result<JsonRpcResponse, McpError> {
    let request: JsonRpcRequest =
        serde_json::from_str(line).map_err(|e| McpError::ParseError(e.to_string()))?;

    if request.jsonrpc != "2.0" {
        return Ok(error_response(
            request.id,
            INVALID_REQUEST,
            format!("Unsupported jsonrpc version: {}", request.jsonrpc),
        ));
    }

    match request.method.as_str() {
        "initialize" => handlers.handle_initialize(request).await,
        "initialized" | "notifications/initialized" => handlers.handle_initialized(request).await,
        "tools/list" => handlers.handle_tools_list(request).await,
        "tools/call" => handlers.handle_tools_call(request).await,
        "ping" => handlers.handle_ping(request).await,
        _ => Ok(error_response(
            request.id,
            METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )),
    }
}
