// Retrieval and ranking through the engine

use crate::common::{create_test_engine, TestRepo};
use coderag::core::types::IndexParams;
use coderag::RagError;

#[tokio::test]
async fn test_only_matching_files_are_returned() {
    let repo = TestRepo::with_files(&[
        ("a.js", "function authenticate(user) { return user.valid; }"),
        ("b.js", "function other() { return 42; }"),
    ]);
    let engine = create_test_engine(repo.path());
    engine.index_directory(IndexParams::new(".")).await.unwrap();

    let hits = engine.search("authenticate user", None).unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "a.js");
    assert_eq!(hits[0].filename, "a.js");
    assert_eq!(hits[0].score, 1.0);
}

#[tokio::test]
async fn test_results_ranked_by_token_overlap() {
    let repo = TestRepo::with_files(&[
        ("partial.rs", "pub fn parse(input: &str) {}"),
        ("full.rs", "pub fn parse_config(loader: Loader) {}"),
    ]);
    let engine = create_test_engine(repo.path());
    engine.index_directory(IndexParams::new(".")).await.unwrap();

    let hits = engine.search("parse config loader", None).unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].path, "full.rs");
    assert_eq!(hits[0].score, 1.0);
    assert_eq!(hits[1].path, "partial.rs");
    assert!((hits[1].score - 1.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_equal_scores_keep_indexing_order() {
    let repo = TestRepo::with_files(&[
        ("b_second.rs", "fn handler() {}"),
        ("a_first.rs", "fn handler() {}"),
    ]);
    let engine = create_test_engine(repo.path());
    engine.index_directory(IndexParams::new(".")).await.unwrap();

    let hits = engine.search("handler", None).unwrap();

    let paths: Vec<&str> = hits.iter().map(|h| h.path.as_str()).collect();
    assert_eq!(paths, vec!["a_first.rs", "b_second.rs"]);
}

#[tokio::test]
async fn test_scores_at_threshold_are_dropped() {
    // one of ten query tokens matches: score 0.1 is not above the threshold
    let repo = TestRepo::with_files(&[("one.rs", "fn alpha() {}")]);
    let engine = create_test_engine(repo.path());
    engine.index_directory(IndexParams::new(".")).await.unwrap();

    let hits = engine
        .search(
            "alpha bravo charlie delta echo foxtrot golf hotel india juliet",
            None,
        )
        .unwrap();

    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_empty_and_short_queries_return_nothing() {
    let repo = TestRepo::with_files(&[("a.rs", "fn main() { let x = 1; }")]);
    let engine = create_test_engine(repo.path());
    engine.index_directory(IndexParams::new(".")).await.unwrap();

    assert!(engine.search("", None).unwrap().is_empty());
    assert!(engine.search("   ", None).unwrap().is_empty());
    assert!(engine.search("fn x", None).unwrap().is_empty());
}

#[tokio::test]
async fn test_search_before_indexing_is_empty() {
    let repo = TestRepo::with_files(&[("a.rs", "fn main() {}")]);
    let engine = create_test_engine(repo.path());

    assert!(engine.search("main", None).unwrap().is_empty());
}

#[tokio::test]
async fn test_top_k_limits_and_caps() {
    let repo = TestRepo::generated(60);
    let engine = create_test_engine(repo.path());
    engine.index_directory(IndexParams::new(".")).await.unwrap();

    // default top_k is 5
    assert_eq!(engine.search("module", None).unwrap().len(), 5);
    assert_eq!(engine.search("module", Some(3)).unwrap().len(), 3);
    // capped at max_top_k (50)
    assert_eq!(engine.search("module", Some(500)).unwrap().len(), 50);

    let err = engine.search("module", Some(0)).unwrap_err();
    assert!(matches!(err, RagError::InvalidQuery(_)));
}

#[tokio::test]
async fn test_overlong_query_rejected() {
    let repo = TestRepo::with_files(&[("a.rs", "fn main() {}")]);
    let engine = create_test_engine(repo.path());

    let query = "word ".repeat(300);
    let err = engine.search(&query, None).unwrap_err();
    assert!(matches!(err, RagError::InvalidQuery(_)));
}

#[tokio::test]
async fn test_filename_match_alone_scores_zero() {
    let repo = TestRepo::with_files(&[("users.rs", "struct UserRepository;")]);
    let engine = create_test_engine(repo.path());
    engine.index_directory(IndexParams::new(".")).await.unwrap();

    // "users" selects the chunk through its filename, but the content lacks it
    assert!(engine.search("USERS", None).unwrap().is_empty());

    let hits = engine.search("UserRepository", None).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 1.0);
}
