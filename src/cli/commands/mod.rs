//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match MCP tool names without the `rag_` prefix.

pub mod clear;
pub mod completions;
pub mod config;
pub mod index;
pub mod query;
pub mod search;
pub mod status;

// Re-export argument types for use in mod.rs
pub use clear::ClearArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use index::IndexArgs;
pub use query::QueryArgs;
pub use search::SearchArgs;
pub use status::StatusArgs;
