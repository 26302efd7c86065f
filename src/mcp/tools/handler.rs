//! Tool handler trait and common types

use crate::mcp::error::McpError;
use crate::mcp::protocol::{ContentBlock, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Trait for MCP tool implementations
///
/// Each tool (rag_query, rag_status, etc.) implements this trait
/// to provide schema and execution logic.
#[async_trait]
pub trait McpToolHandler: Send + Sync {
    /// Tool name (e.g., "rag_query")
    fn name(&self) -> &str;

    /// Tool schema for tools/list
    fn schema(&self) -> ToolSchema;

    /// Execute tool with arguments
    async fn execute(&self, args: Value) -> Result<ToolResult, McpError>;
}

/// Helper function to create a text content block
pub fn text_content(text: String) -> ToolResult {
    ToolResult {
        content: vec![ContentBlock::Text { text }],
        is_error: None,
    }
}

/// Render an operation result as pretty JSON text.
///
/// Results carrying `"success": false` are flagged with `isError`.
pub fn json_content(value: &Value) -> Result<ToolResult, McpError> {
    let mut result = text_content(serde_json::to_string_pretty(value)?);
    if value.get("success") == Some(&Value::Bool(false)) {
        result.is_error = Some(true);
    }
    Ok(result)
}

/// Decode tool arguments, treating a missing object as `{}`
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, McpError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}
