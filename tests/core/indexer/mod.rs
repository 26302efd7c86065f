//! Indexer layer tests
//!
//! Directory walking, filtering and UTF-8 safe chunking through the
//! engine's indexing entry point.

mod test_walk;
