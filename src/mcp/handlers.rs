//! MCP protocol method handlers

use crate::core::services::RagEngine;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::{
    RagClearHandler, RagIndexDirectoryHandler, RagQueryHandler, RagSearchHandler,
    RagStatusHandler, ToolRegistry,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Name reported in `serverInfo`
pub const SERVER_NAME: &str = "coderag-mcp";

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tool_registry: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(engine: Arc<RagEngine>) -> Self {
        let mut registry = ToolRegistry::new();

        registry.register(Arc::new(RagIndexDirectoryHandler::new(Arc::clone(&engine))));
        registry.register(Arc::new(RagQueryHandler::new(Arc::clone(&engine))));
        registry.register(Arc::new(RagSearchHandler::new(Arc::clone(&engine))));
        registry.register(Arc::new(RagStatusHandler::new(Arc::clone(&engine))));
        registry.register(Arc::new(RagClearHandler::new(engine)));

        Self {
            initialized: AtomicBool::new(false),
            tool_registry: registry,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = serde_json::from_value(request.params.unwrap_or(Value::Null))
            .unwrap_or_default();

        match &params.client_info {
            Some(client) => info!("Client initialized: {}", client.name),
            None => info!("Client initialized"),
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(success_response(request.id, serde_json::to_value(result)?))
    }

    /// Handle initialized notification
    pub async fn handle_initialized(
        &self,
        _request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");

        // Notification: an empty response is never written
        Ok(JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: None,
            result: None,
            error: None,
        })
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();
        Ok(success_response(request.id, json!({ "tools": tools })))
    }

    /// Handle tools/call request
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let Some(params_value) = request.params.clone() else {
            return Ok(error_response(
                request.id,
                INVALID_PARAMS,
                "Missing params".to_string(),
            ));
        };

        let params: ToolCallParams = match serde_json::from_value(params_value) {
            Ok(p) => p,
            Err(e) => {
                return Ok(error_response(
                    request.id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        let Some(handler) = self.tool_registry.get(&params.name) else {
            return Ok(error_response(
                request.id,
                INVALID_REQUEST,
                format!("Tool not found: {}", params.name),
            ));
        };

        info!("Calling tool {}", params.name);
        match handler.execute(params.arguments).await {
            Ok(result) => Ok(success_response(request.id, serde_json::to_value(result)?)),
            Err(e) => {
                let (code, message) = e.to_code_and_message();
                Ok(error_response(request.id, code, message))
            }
        }
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(success_response(request.id, json!({})))
    }
}

pub fn success_response(id: Option<Value>, result: Value) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: Some(result),
        error: None,
    }
}

pub fn error_response(id: Option<Value>, code: i32, message: String) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: None,
        error: Some(JsonRpcError {
            code,
            message,
            data: None,
        }),
    }
}
