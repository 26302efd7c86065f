//! Tests for the search CLI command

use crate::cli::test_helpers::{create_indexed_engine, create_test_repo, search_test_files};
use crate::common::create_test_engine;
use coderag::cli::commands::search::{execute, SearchArgs};
use coderag::cli::OutputFormat;

fn args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        top_k: None,
        files_only: false,
    }
}

/// Test search with human output
#[tokio::test]
async fn test_search_human() {
    let repo = create_test_repo(&search_test_files());
    let engine = create_indexed_engine(&repo).await;

    let result = execute(args("load_config"), &engine, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search with JSON output and files-only
#[tokio::test]
async fn test_search_json_files_only() {
    let repo = create_test_repo(&search_test_files());
    let engine = create_indexed_engine(&repo).await;

    let mut search_args = args("run_server");
    search_args.files_only = true;
    search_args.top_k = Some(1);

    let result = execute(search_args, &engine, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// Test search with no matches is not an error
#[tokio::test]
async fn test_search_no_results() {
    let repo = create_test_repo(&search_test_files());
    let engine = create_indexed_engine(&repo).await;

    let result = execute(args("kubernetes"), &engine, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test search before anything is indexed
#[tokio::test]
async fn test_search_requires_index() {
    let repo = create_test_repo(&search_test_files());
    let engine = create_test_engine(repo.path());

    let err = execute(args("config"), &engine, OutputFormat::Human)
        .await
        .unwrap_err()
        .to_string();
    assert!(err.contains("coderag index"));
}

/// Test zero top-k is rejected
#[tokio::test]
async fn test_search_zero_top_k() {
    let repo = create_test_repo(&search_test_files());
    let engine = create_indexed_engine(&repo).await;

    let mut search_args = args("config");
    search_args.top_k = Some(0);

    let err = execute(search_args, &engine, OutputFormat::Json)
        .await
        .unwrap_err()
        .to_string();
    assert!(err.contains("Invalid query"));
}
