//! Config command - show current configuration

use crate::cli::output::print_json;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Execute the show-config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            let snapshot = config
                .snapshot_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|e| format!("<{e}>"));

            println!("Configuration:");
            println!("  project:");
            println!("    root: {}", config.project.root.display());
            println!("  indexing:");
            println!("    chunk_size: {}", config.indexing.chunk_size);
            println!("    overlap: {}", config.indexing.overlap);
            println!("    batch_size: {}", config.indexing.batch_size);
            println!("    max_files: {}", config.indexing.max_files);
            println!("    max_depth: {}", config.indexing.max_depth);
            println!("    max_file_size_mb: {}", config.indexing.max_file_size_mb);
            println!("    extensions: {:?}", config.indexing.extensions);
            println!("    exclude_patterns: {:?}", config.indexing.exclude_patterns);
            println!("  search:");
            println!("    default_top_k: {}", config.search.default_top_k);
            println!("    max_top_k: {}", config.search.max_top_k);
            println!("    min_score: {}", config.search.min_score);
            println!("  snapshot:");
            println!("    enabled: {}", config.snapshot.enabled);
            println!("    path: {snapshot}");
            println!("  completion:");
            println!("    base_url: {}", config.completion.base_url);
            println!("    api_key_env: {}", config.completion.api_key_env);
            println!("    default_model: {}", config.completion.default_model);
        }
        OutputFormat::Json => print_json(config)?,
    }

    Ok(())
}
