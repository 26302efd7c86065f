//! MCP tool implementations
//!
//! This module contains the MCP tool handlers that expose the RAG
//! engine's operations to MCP clients.

pub mod handler;
pub mod rag_clear;
pub mod rag_index_directory;
pub mod rag_query;
pub mod rag_search;
pub mod rag_status;
pub mod registry;

pub use handler::{json_content, parse_args, text_content, McpToolHandler};
pub use rag_clear::RagClearHandler;
pub use rag_index_directory::RagIndexDirectoryHandler;
pub use rag_query::RagQueryHandler;
pub use rag_search::RagSearchHandler;
pub use rag_status::RagStatusHandler;
pub use registry::ToolRegistry;
