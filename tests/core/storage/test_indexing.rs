// Document store behaviour across repeated indexing calls

use crate::common::{create_test_engine, TestRepo};
use coderag::core::types::IndexParams;
use std::sync::Arc;

#[tokio::test]
async fn test_reindex_is_idempotent() {
    let repo = TestRepo::generated(10);
    let engine = create_test_engine(repo.path());

    let first = engine.index_directory(IndexParams::new(".")).await.unwrap();
    let second = engine.index_directory(IndexParams::new(".")).await.unwrap();

    assert_eq!(first.total_documents, 10);
    assert_eq!(second.total_documents, 10);
    assert_eq!(first.total_chunks, second.total_chunks);
    assert_eq!(second.indexed_count, 10);
}

#[tokio::test]
async fn test_changed_file_replaced_in_place() {
    let repo = TestRepo::with_files(&[
        ("a.rs", "fn original_name() {}"),
        ("b.rs", "fn untouched() {}"),
    ]);
    let engine = create_test_engine(repo.path());
    engine.index_directory(IndexParams::new(".")).await.unwrap();

    repo.write("a.rs", "fn renamed_function() {}");
    let report = engine.index_directory(IndexParams::new(".")).await.unwrap();

    assert_eq!(report.total_documents, 2);
    assert!(engine.search("original_name", None).unwrap().is_empty());

    let hits = engine.search("renamed_function", None).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "a.rs");

    // replaced documents keep their position in the store
    let status = engine.status().unwrap();
    let paths: Vec<&str> = status.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["a.rs", "b.rs"]);
}

#[tokio::test]
async fn test_indexing_subdirectories_accumulates() {
    let repo = TestRepo::with_files(&[
        ("api/routes.rs", "fn routes() {}"),
        ("web/view.rs", "fn view() {}"),
    ]);
    let engine = create_test_engine(repo.path());

    engine.index_directory(IndexParams::new("api")).await.unwrap();
    let report = engine.index_directory(IndexParams::new("web")).await.unwrap();

    assert_eq!(report.indexed_count, 1);
    assert_eq!(report.total_documents, 2);
    assert_eq!(engine.search("routes", None).unwrap().len(), 1);
    assert_eq!(engine.search("view", None).unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleted_files_stay_until_cleared() {
    let repo = TestRepo::with_files(&[("gone.rs", "fn vanishing() {}"), ("kept.rs", "fn kept() {}")]);
    let engine = create_test_engine(repo.path());
    engine.index_directory(IndexParams::new(".")).await.unwrap();

    std::fs::remove_file(repo.path().join("gone.rs")).unwrap();
    let report = engine.index_directory(IndexParams::new(".")).await.unwrap();

    assert_eq!(report.indexed_count, 1);
    assert_eq!(report.total_documents, 2);
    assert_eq!(engine.search("vanishing", None).unwrap().len(), 1);
}

#[tokio::test]
async fn test_status_and_clear() {
    let repo = TestRepo::generated(3);
    let engine = create_test_engine(repo.path());

    let status = engine.status().unwrap();
    assert!(!status.indexed);
    assert!(status.last_updated.is_none());

    engine.index_directory(IndexParams::new(".")).await.unwrap();
    let status = engine.status().unwrap();
    assert!(status.indexed);
    assert_eq!(status.documents, 3);
    assert_eq!(status.total_chunks, 3);
    assert!(status.last_updated.is_some());
    assert_eq!(status.files[0].path, "src/module_000.rs");

    engine.clear().await.unwrap();
    let status = engine.status().unwrap();
    assert!(!status.indexed);
    assert_eq!(status.documents, 0);
    assert!(status.files.is_empty());
    assert!(engine.search("module", None).unwrap().is_empty());

    // clearing an empty engine is fine
    engine.clear().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_searches_during_indexing() {
    let repo = TestRepo::generated(40);
    let engine = create_test_engine(repo.path());
    engine.index_directory(IndexParams::new(".")).await.unwrap();

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let engine = Arc::clone(&engine);
        tasks.push(tokio::spawn(async move {
            engine.index_directory(IndexParams::new(".")).await.map(|_| ())
        }));
    }
    for _ in 0..8 {
        let engine = Arc::clone(&engine);
        tasks.push(tokio::spawn(async move {
            let hits = engine.search("module", Some(10))?;
            assert_eq!(hits.len(), 10);
            Ok::<(), coderag::RagError>(())
        }));
    }

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let status = engine.status().unwrap();
    assert_eq!(status.documents, 40);
    assert_eq!(status.total_chunks, 40);
}
