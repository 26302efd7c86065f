//! Query tool handler

use super::handler::{json_content, parse_args, McpToolHandler};
use crate::core::operations::{self, QueryParams};
use crate::core::services::RagEngine;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct RagQueryHandler {
    engine: Arc<RagEngine>,
}

impl RagQueryHandler {
    pub fn new(engine: Arc<RagEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl McpToolHandler for RagQueryHandler {
    fn name(&self) -> &str {
        "rag_query"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "rag_query".to_string(),
            description: "Answer a question about the indexed code. Retrieves the most relevant \
                         chunks and asks the completion model to answer from them only. \
                         Returns the answer and the files it was drawn from."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Question or keywords, e.g. 'how is the user authenticated'"
                    },
                    "model": {
                        "type": "string",
                        "description": "Completion model name. Defaults to the configured model."
                    },
                    "topK": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Number of chunks to use as context (default 5)"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let params: QueryParams = parse_args(args)?;
        let result = operations::rag_query(&self.engine, params).await;
        json_content(&result)
    }
}
