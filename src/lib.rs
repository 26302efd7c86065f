//! coderag - Codebase-aware retrieval for prompt assembly
//!
//! Indexes a directory of source files into overlapping chunks,
//! keeps a token inverted index over them, and answers keyword
//! queries with ranked snippets that can be handed to a language
//! model as context.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg, security
//!   - indexer (walking, chunking, batched reads)
//!   - storage (document store, inverted index, snapshot)
//!   - search (retrieval, context assembly)
//!   - services (the shared `RagEngine`)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, protocol
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Key Features
//!
//! - UTF-8 safe chunking (character-based, never panics)
//! - Lexical overlap scoring (no vector embeddings)
//! - Indexing confined to the project root
//! - JSON snapshot restored on startup

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{RagError, Result};
pub use core::services::RagEngine;
pub use core::types::*;
