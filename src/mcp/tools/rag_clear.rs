//! Clear tool handler

use super::handler::{json_content, McpToolHandler};
use crate::core::operations;
use crate::core::services::RagEngine;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct RagClearHandler {
    engine: Arc<RagEngine>,
}

impl RagClearHandler {
    pub fn new(engine: Arc<RagEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl McpToolHandler for RagClearHandler {
    fn name(&self) -> &str {
        "rag_clear"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "rag_clear".to_string(),
            description: "Remove every indexed document and delete the saved index file.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        json_content(&operations::rag_clear(&self.engine).await)
    }
}
