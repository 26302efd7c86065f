//! Search command - rank indexed chunks without calling a model

use crate::cli::output::{colors, print_json, snippet};
use crate::cli::OutputFormat;
use crate::core::search::relevance;
use crate::core::services::RagEngine;
use crate::core::types::SearchHit;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'k')]
    pub top_k: Option<usize>,

    /// Only show file paths (no content)
    #[arg(long)]
    pub files_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub path: String,
    pub score: f64,
    pub relevance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub count: usize,
    pub results: Vec<SearchResultItem>,
}

impl SearchOutput {
    pub fn from_hits(query: &str, hits: Vec<SearchHit>, files_only: bool) -> Self {
        let results: Vec<SearchResultItem> = hits
            .into_iter()
            .enumerate()
            .map(|(i, hit)| SearchResultItem {
                rank: i + 1,
                relevance: relevance(hit.score),
                score: hit.score,
                path: hit.path,
                content: (!files_only).then_some(hit.content),
            })
            .collect();

        Self {
            query: query.to_string(),
            count: results.len(),
            results,
        }
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    engine: &Arc<RagEngine>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if engine.document_count()? == 0 {
        return Err("Nothing is indexed yet. Run 'coderag index <directory>' first.".into());
    }

    let hits = engine.search(&args.query, args.top_k)?;
    let output = SearchOutput::from_hits(&args.query, hits, args.files_only);

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&args.query));
                return Ok(());
            }

            println!(
                "Found {} result(s):\n",
                colors::number(&output.count.to_string())
            );
            for result in &output.results {
                if args.files_only {
                    println!("{}", colors::file_path(&result.path));
                    continue;
                }
                println!(
                    "[{}] {} {}",
                    colors::rank(&result.rank.to_string()),
                    colors::file_path(&result.path),
                    colors::score(&format!("({})", result.relevance))
                );
                if let Some(content) = &result.content {
                    for line in snippet(content, 5, 100) {
                        println!("    {}", colors::dim(&line));
                    }
                }
                println!();
            }
        }
        OutputFormat::Json => print_json(&output)?,
    }

    Ok(())
}
