//! Tool registry for managing MCP tools

use super::handler::McpToolHandler;
use crate::mcp::protocol::ToolSchema;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry for all available MCP tools
///
/// Tools are kept sorted by name so `tools/list` is stable.
pub struct ToolRegistry {
    handlers: BTreeMap<String, Arc<dyn McpToolHandler>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Register a tool handler, replacing any tool with the same name
    pub fn register(&mut self, handler: Arc<dyn McpToolHandler>) {
        let name = handler.name().to_string();
        if self.handlers.insert(name.clone(), handler).is_some() {
            tracing::warn!("Tool {} registered twice, keeping the latest", name);
        }
    }

    /// Get a tool handler by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpToolHandler>> {
        self.handlers.get(name)
    }

    /// Schemas of all tools, sorted by name
    pub fn list(&self) -> Vec<ToolSchema> {
        self.handlers
            .values()
            .map(|handler| handler.schema())
            .collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
