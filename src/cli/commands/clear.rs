//! Clear command - drop every indexed document

use crate::cli::output::{print_json, print_success};
use crate::cli::OutputFormat;
use crate::core::services::RagEngine;
use clap::Args;
use serde_json::json;
use std::sync::Arc;

/// Arguments for the clear command
#[derive(Args, Debug)]
pub struct ClearArgs {}

/// Execute the clear command
pub async fn execute(
    _args: ClearArgs,
    engine: &Arc<RagEngine>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let removed = engine.document_count()?;
    engine.clear().await?;

    match format {
        OutputFormat::Human => {
            print_success(&format!("Cleared {removed} indexed documents"));
        }
        OutputFormat::Json => print_json(&json!({ "success": true, "removed": removed }))?,
    }

    Ok(())
}
