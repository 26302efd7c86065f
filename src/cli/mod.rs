//! CLI adapter for coderag
//!
//! Provides a command-line interface to the RAG engine.
//! This module is parallel to `mcp/` - both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// coderag - codebase-aware retrieval for LLM prompts
///
/// Index source files under a project root, search them by keyword,
/// and ask questions answered from the most relevant chunks.
#[derive(Parser, Debug)]
#[command(name = "coderag")]
#[command(version)]
#[command(about = "Codebase indexing and retrieval for LLM prompts", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Project root (overrides configuration)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index a directory under the project root
    Index(commands::IndexArgs),

    /// Ask a question answered from indexed code
    Query(commands::QueryArgs),

    /// Show the best-matching chunks without calling a model
    Search(commands::SearchArgs),

    /// Show what is indexed
    Status(commands::StatusArgs),

    /// Remove all indexed documents and the saved index
    Clear(commands::ClearArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  coderag completions bash > ~/.local/share/bash-completion/completions/coderag
    ///   zsh:   coderag completions zsh > ~/.zfunc/_coderag
    ///   fish:  coderag completions fish > ~/.config/fish/completions/coderag.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::RagEngine;
    use std::sync::Arc;

    // Completions don't need the engine
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        command => command,
    };

    let mut config = Config::load()?;
    if let Some(root) = cli.root {
        config.project.root = root;
    }

    if let Commands::ShowConfig(args) = command {
        return commands::config::execute(args, &config, cli.format);
    }

    let engine = Arc::new(RagEngine::new(config)?);

    match command {
        Commands::Index(args) => commands::index::execute(args, &engine, cli.format).await,
        Commands::Query(args) => commands::query::execute(args, &engine, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &engine, cli.format).await,
        Commands::Status(args) => commands::status::execute(args, &engine, cli.format).await,
        Commands::Clear(args) => commands::clear::execute(args, &engine, cli.format).await,
        Commands::ShowConfig(_) | Commands::Completions(_) => Ok(()),
    }
}
