//! Index command - index a directory under the project root

use crate::cli::output::{colors, format_duration_ms, print_json, print_warning};
use crate::cli::OutputFormat;
use crate::core::services::RagEngine;
use crate::core::types::IndexParams;
use clap::Args;
use std::sync::Arc;

/// Arguments for the index command
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Directory to index, relative to the project root
    #[arg(default_value = ".")]
    pub directory: String,

    /// File extensions to include, without the dot (can be specified multiple times)
    #[arg(long, short = 'x')]
    pub ext: Vec<String>,

    /// Maximum number of files to index
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Skip entries whose name contains this text (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl IndexArgs {
    /// Empty lists fall back to the configured defaults
    pub fn to_params(&self) -> IndexParams {
        IndexParams {
            directory: self.directory.clone(),
            extensions: (!self.ext.is_empty()).then(|| self.ext.clone()),
            max_files: self.max_files,
            exclude_patterns: (!self.exclude.is_empty()).then(|| self.exclude.clone()),
        }
    }
}

/// Execute the index command
pub async fn execute(
    args: IndexArgs,
    engine: &Arc<RagEngine>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Indexing {} under {}...",
            colors::file_path(&args.directory),
            colors::dim(&engine.project_root().display().to_string())
        );
    }

    let report = engine.index_directory(args.to_params()).await?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} files in {}",
                colors::success("Indexed"),
                colors::number(&report.indexed_count.to_string()),
                colors::number(&format_duration_ms(report.duration_ms))
            );
            println!(
                "Store: {} documents, {} chunks",
                colors::number(&report.total_documents.to_string()),
                colors::number(&report.total_chunks.to_string())
            );
            if report.skipped > 0 {
                print_warning(&format!("{} unreadable files skipped", report.skipped));
            }
            if !args.quiet {
                for path in &report.files {
                    println!("  {}", colors::file_path(path));
                }
                if report.indexed_count > report.files.len() {
                    println!(
                        "  {}",
                        colors::dim(&format!(
                            "... and {} more",
                            report.indexed_count - report.files.len()
                        ))
                    );
                }
            }
        }
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}
