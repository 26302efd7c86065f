//! coderag CLI - command-line interface to the RAG engine
//!
//! Use this for scripting, automation, or manual operations without an MCP client.
//!
//! # Examples
//!
//! ```bash
//! # Index the src directory of the current project
//! coderag --root . index src
//!
//! # Show the best-matching chunks
//! coderag search "parse config"
//!
//! # Ask a question
//! coderag query "where is the config file parsed?"
//! ```

use clap::Parser;
use coderag::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coderag=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        coderag::cli::output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
