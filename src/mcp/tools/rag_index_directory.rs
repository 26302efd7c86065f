//! Index directory tool handler

use super::handler::{json_content, parse_args, McpToolHandler};
use crate::core::operations;
use crate::core::services::RagEngine;
use crate::core::types::IndexParams;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct RagIndexDirectoryHandler {
    engine: Arc<RagEngine>,
}

impl RagIndexDirectoryHandler {
    pub fn new(engine: Arc<RagEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl McpToolHandler for RagIndexDirectoryHandler {
    fn name(&self) -> &str {
        "rag_index_directory"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "rag_index_directory".to_string(),
            description: "Index source files under a directory of the project for retrieval. \
                         Files already indexed at the same path are replaced. The directory \
                         must resolve inside the project root."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "directory": {
                        "type": "string",
                        "description": "Directory relative to the project root (e.g. 'src' or '.')"
                    },
                    "extensions": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "File extensions to include, without the dot. Defaults to common source types."
                    },
                    "maxFiles": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Maximum number of files to index"
                    },
                    "excludePatterns": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Skip entries whose name contains any of these strings"
                    }
                },
                "required": ["directory"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let params: IndexParams = parse_args(args)?;
        let result = operations::rag_index_directory(&self.engine, params).await;
        json_content(&result)
    }
}
