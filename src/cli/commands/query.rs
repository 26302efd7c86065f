//! Query command - answer a question from indexed code

use crate::cli::output::{colors, print_json};
use crate::cli::OutputFormat;
use crate::core::services::RagEngine;
use crate::core::types::SourceRef;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the query command
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Question about the indexed code
    pub query: String,

    /// Model to ask (defaults to the configured model)
    #[arg(long, short = 'm')]
    pub model: Option<String>,

    /// Number of chunks to use as context
    #[arg(long, short = 'k')]
    pub top_k: Option<usize>,
}

/// Query response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutput {
    pub response: String,
    pub model: String,
    pub sources_used: Vec<SourceRef>,
    pub total_indexed: usize,
}

/// Execute the query command
pub async fn execute(
    args: QueryArgs,
    engine: &Arc<RagEngine>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = args
        .model
        .clone()
        .unwrap_or_else(|| engine.config().completion.default_model.clone());

    let answer = engine
        .answer(&args.query, Some(&model), args.top_k)
        .await?;

    let output = QueryOutput {
        response: answer.response,
        model,
        sources_used: answer.sources_used,
        total_indexed: answer.total_indexed,
    };

    match format {
        OutputFormat::Human => {
            println!("{}\n", output.response);
            println!(
                "{} {} of {} indexed files via {}",
                colors::label("Sources:"),
                colors::number(&output.sources_used.len().to_string()),
                colors::number(&output.total_indexed.to_string()),
                colors::dim(&output.model)
            );
            for source in &output.sources_used {
                println!(
                    "  {} {}",
                    colors::file_path(&source.path),
                    colors::score(&format!("({})", source.relevance))
                );
            }
        }
        OutputFormat::Json => print_json(&output)?,
    }

    Ok(())
}
