//! Status tool handler

use super::handler::{json_content, McpToolHandler};
use crate::core::operations;
use crate::core::services::RagEngine;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct RagStatusHandler {
    engine: Arc<RagEngine>,
}

impl RagStatusHandler {
    pub fn new(engine: Arc<RagEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl McpToolHandler for RagStatusHandler {
    fn name(&self) -> &str {
        "rag_status"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "rag_status".to_string(),
            description: "Show whether anything is indexed, document and chunk counts, \
                         the last indexing time and the chunk count per file."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        json_content(&operations::rag_status(&self.engine))
    }
}
