//! MCP-specific error types

use thiserror::Error;

use crate::core::error::RagError;
use crate::mcp::protocol::{INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, PARSE_ERROR};

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and message for this error
    pub fn to_code_and_message(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }
}

impl From<RagError> for McpError {
    fn from(err: RagError) -> Self {
        if err.is_bad_request() {
            McpError::InvalidParams(err.message())
        } else {
            McpError::InternalError(err.message())
        }
    }
}
