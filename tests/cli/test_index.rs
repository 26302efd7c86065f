//! Tests for the index CLI command
//!
//! Tests the index command handler:
//! - Indexing the project root and subdirectories
//! - Extension and exclude overrides
//! - Error cases (missing directory, path outside the root)

use crate::cli::test_helpers::create_test_repo;
use crate::common::create_test_engine;
use coderag::cli::commands::index::{execute, IndexArgs};
use coderag::cli::OutputFormat;

fn args(directory: &str) -> IndexArgs {
    IndexArgs {
        directory: directory.to_string(),
        ext: vec![],
        max_files: None,
        exclude: vec![],
        quiet: true,
    }
}

/// Test indexing the whole project (human output)
#[tokio::test]
async fn test_index_root_human() {
    let repo = create_test_repo(&[
        ("src/main.rs", "fn main() {}"),
        ("src/lib.rs", "pub fn lib() {}"),
        ("README.md", "# Project"),
    ]);
    let engine = create_test_engine(repo.path());

    let result = execute(args("."), &engine, OutputFormat::Human).await;
    assert!(result.is_ok(), "Index should succeed: {:?}", result.err());
    assert_eq!(engine.document_count().unwrap(), 3);
}

/// Test indexing a subdirectory (JSON output)
#[tokio::test]
async fn test_index_subdirectory_json() {
    let repo = create_test_repo(&[("src/main.rs", "fn main() {}"), ("docs/guide.md", "# Guide")]);
    let engine = create_test_engine(repo.path());

    let result = execute(args("src"), &engine, OutputFormat::Json).await;
    assert!(result.is_ok());
    assert_eq!(engine.document_count().unwrap(), 1);
}

/// Test extension and exclude overrides
#[tokio::test]
async fn test_index_with_overrides() {
    let repo = create_test_repo(&[
        ("src/main.rs", "fn main() {}"),
        ("src/gen/out.rs", "fn generated() {}"),
        ("README.md", "# Project"),
    ]);
    let engine = create_test_engine(repo.path());

    let mut index_args = args(".");
    index_args.ext = vec!["rs".to_string()];
    index_args.exclude = vec!["gen".to_string()];

    execute(index_args, &engine, OutputFormat::Human).await.unwrap();

    let status = engine.status().unwrap();
    let paths: Vec<&str> = status.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["src/main.rs"]);
}

/// Test max-files cap
#[tokio::test]
async fn test_index_max_files() {
    let repo = create_test_repo(&[("a.rs", "fn a() {}"), ("b.rs", "fn b() {}"), ("c.rs", "fn c() {}")]);
    let engine = create_test_engine(repo.path());

    let mut index_args = args(".");
    index_args.max_files = Some(2);

    execute(index_args, &engine, OutputFormat::Json).await.unwrap();
    assert_eq!(engine.document_count().unwrap(), 2);
}

/// Test error for a directory that does not exist
#[tokio::test]
async fn test_index_missing_directory() {
    let repo = create_test_repo(&[("a.rs", "fn a() {}")]);
    let engine = create_test_engine(repo.path());

    let result = execute(args("nope"), &engine, OutputFormat::Human).await;
    let err = result.unwrap_err().to_string();
    assert!(err.contains("Directory not found"), "unexpected error: {err}");
}

/// Test error for a directory outside the project root
#[tokio::test]
async fn test_index_outside_root() {
    let repo = create_test_repo(&[("inner/a.rs", "fn a() {}")]);
    let engine = create_test_engine(&repo.path().join("inner"));

    let result = execute(args(".."), &engine, OutputFormat::Human).await;
    let err = result.unwrap_err().to_string();
    assert!(err.contains("Access denied"), "unexpected error: {err}");
}
