// Directory traversal through rag_index_directory semantics

use crate::common::{create_test_engine, sample_project, TestRepo};
use coderag::core::types::IndexParams;
use coderag::RagError;

#[tokio::test]
async fn test_index_skips_excluded_hidden_and_unknown_extensions() {
    let repo = sample_project();
    let engine = create_test_engine(repo.path());

    let report = engine.index_directory(IndexParams::new(".")).await.unwrap();

    // png is not a configured extension, node_modules is excluded, .hidden is hidden
    let mut files = report.files.clone();
    files.sort();
    assert_eq!(
        files,
        vec!["README.md", "src/auth.js", "src/config.rs", "src/db.py"]
    );
    assert_eq!(report.indexed_count, 4);
    assert_eq!(report.skipped, 0);
}

#[tokio::test]
async fn test_index_paths_are_relative_to_root_for_subdirectory() {
    let repo = sample_project();
    let engine = create_test_engine(repo.path());

    let report = engine.index_directory(IndexParams::new("src")).await.unwrap();

    assert_eq!(report.indexed_count, 3);
    assert!(report.files.iter().all(|p| p.starts_with("src/")));
}

#[tokio::test]
async fn test_index_respects_extension_override() {
    let repo = sample_project();
    let engine = create_test_engine(repo.path());

    let params = IndexParams {
        extensions: Some(vec!["PY".to_string()]),
        ..IndexParams::new(".")
    };
    let report = engine.index_directory(params).await.unwrap();

    assert_eq!(report.files, vec!["src/db.py"]);
}

#[tokio::test]
async fn test_index_respects_max_files() {
    let repo = TestRepo::generated(30);
    let engine = create_test_engine(repo.path());

    let params = IndexParams {
        max_files: Some(7),
        ..IndexParams::new(".")
    };
    let report = engine.index_directory(params).await.unwrap();

    assert_eq!(report.indexed_count, 7);
    assert_eq!(report.total_documents, 7);
}

#[tokio::test]
async fn test_report_lists_at_most_twenty_files() {
    let repo = TestRepo::generated(25);
    let engine = create_test_engine(repo.path());

    let report = engine.index_directory(IndexParams::new(".")).await.unwrap();

    assert_eq!(report.indexed_count, 25);
    assert_eq!(report.files.len(), 20);
}

#[tokio::test]
async fn test_index_respects_custom_exclude_patterns() {
    let repo = TestRepo::with_files(&[
        ("src/keep.rs", "pub fn keep() {}"),
        ("generated/out.rs", "pub fn generated() {}"),
    ]);
    let engine = create_test_engine(repo.path());

    let params = IndexParams {
        exclude_patterns: Some(vec!["generated".to_string()]),
        ..IndexParams::new(".")
    };
    let report = engine.index_directory(params).await.unwrap();

    assert_eq!(report.files, vec!["src/keep.rs"]);
}

#[tokio::test]
async fn test_index_rejects_paths_outside_root() {
    let repo = sample_project();
    let engine = create_test_engine(&repo.path().join("src"));

    let err = engine
        .index_directory(IndexParams::new("../"))
        .await
        .unwrap_err();
    assert!(matches!(err, RagError::PathTraversal { .. }));

    let err = engine
        .index_directory(IndexParams::new("/etc"))
        .await
        .unwrap_err();
    assert!(matches!(err, RagError::PathTraversal { .. }));
}

#[tokio::test]
async fn test_index_missing_directory() {
    let repo = sample_project();
    let engine = create_test_engine(repo.path());

    let err = engine
        .index_directory(IndexParams::new("does-not-exist"))
        .await
        .unwrap_err();
    assert!(matches!(err, RagError::DirectoryNotFound(_)));

    let err = engine
        .index_directory(IndexParams::new("README.md"))
        .await
        .unwrap_err();
    assert!(matches!(err, RagError::DirectoryNotFound(_)));
}

#[tokio::test]
async fn test_unreadable_files_are_skipped() {
    let repo = TestRepo::with_files(&[("src/ok.rs", "pub fn fine() {}")]);
    std::fs::write(repo.path().join("src/binary.rs"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    let engine = create_test_engine(repo.path());

    let report = engine.index_directory(IndexParams::new(".")).await.unwrap();

    assert_eq!(report.indexed_count, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.files, vec!["src/ok.rs"]);
}
