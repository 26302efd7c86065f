//! Search tool handler (retrieval only, no generation)

use super::handler::{json_content, parse_args, McpToolHandler};
use crate::core::operations::{self, SearchParams};
use crate::core::services::RagEngine;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct RagSearchHandler {
    engine: Arc<RagEngine>,
}

impl RagSearchHandler {
    pub fn new(engine: Arc<RagEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl McpToolHandler for RagSearchHandler {
    fn name(&self) -> &str {
        "rag_search"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "rag_search".to_string(),
            description: "Return the highest-scoring indexed chunks for a keyword query without \
                         calling a model. Scores are the fraction of query words found in the chunk."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Keywords to look for"
                    },
                    "topK": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Maximum number of chunks (default 5)"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let params: SearchParams = parse_args(args)?;
        json_content(&operations::rag_search(&self.engine, params))
    }
}
