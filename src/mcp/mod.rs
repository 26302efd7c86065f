//! MCP (Model Context Protocol) server module
//!
//! This module implements a JSON-RPC 2.0 compliant MCP server over
//! stdio that exposes the RAG engine's operations as MCP tools.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

// Re-export main types
pub use error::McpError;
pub use handlers::ProtocolHandlers;
pub use server::{process_message, McpServer};
pub use tools::{McpToolHandler, ToolRegistry};
