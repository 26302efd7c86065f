//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (MCP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **security**: Project-root containment
//! - **indexer**: File walking, chunking and batched reads
//! - **storage**: Document store, inverted index, snapshot file
//! - **search**: Tokenization, retrieval and context assembly
//! - **completion**: Completion provider boundary
//! - **services**: The shared `RagEngine`
//! - **operations**: JSON-shaped entry points for adapters

pub mod completion;
pub mod config;
pub mod error;
pub mod indexer;
pub mod operations;
pub mod search;
pub mod security;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{RagError, Result};
pub use services::RagEngine;
