//! Status command - show what is indexed

use crate::cli::output::{colors, format_relative_time, print_json};
use crate::cli::OutputFormat;
use crate::core::services::RagEngine;
use clap::Args;
use std::sync::Arc;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// List every indexed file with its chunk count
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Execute the status command
pub async fn execute(
    args: StatusArgs,
    engine: &Arc<RagEngine>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = engine.status()?;

    match format {
        OutputFormat::Human => {
            if !report.indexed {
                println!("{}", colors::dim("Nothing indexed"));
                return Ok(());
            }

            println!(
                "{:<14} {}",
                colors::label("Root:"),
                colors::file_path(&engine.project_root().display().to_string())
            );
            println!(
                "{:<14} {}",
                colors::label("Documents:"),
                colors::number(&report.documents.to_string())
            );
            println!(
                "{:<14} {}",
                colors::label("Chunks:"),
                colors::number(&report.total_chunks.to_string())
            );
            if let Some(updated) = &report.last_updated {
                println!(
                    "{:<14} {} ({})",
                    colors::label("Updated:"),
                    updated.format("%Y-%m-%d %H:%M:%S UTC"),
                    colors::dim(&format_relative_time(updated))
                );
            }
            if args.verbose {
                println!();
                for file in &report.files {
                    println!(
                        "  {} {}",
                        colors::file_path(&file.path),
                        colors::dim(&format!("({} chunks)", file.chunks))
                    );
                }
            }
        }
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}
