//! Core data types for the coderag engine.
//!
//! This module defines the records held in the document store,
//! the references stored in the inverted index, and the request and
//! report structures exchanged with the adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single window of a document's text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// `<docId>-<ordinal>`
    pub id: String,

    /// The actual text content
    pub content: String,

    /// Lowercased copy of `content`, cached for scoring
    pub lowercase_content: String,

    /// Character offset where the chunk starts in the source text
    pub start_offset: usize,

    /// Character offset (exclusive) where the chunk ends
    pub end_offset: usize,
}

/// An indexed source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Content hash of path + content, used to namespace chunk ids
    pub id: String,

    /// Path relative to the project root, `/`-separated. Unique in the store.
    pub path: String,

    /// Final path component
    pub filename: String,

    /// Lowercased extension without the dot (empty if none)
    pub extension: String,

    /// Leading characters of the file for display
    pub preview_content: String,

    /// Chunks in increasing offset order
    pub chunks: Vec<Chunk>,

    /// When this version of the file was indexed
    pub indexed_at: DateTime<Utc>,
}

/// Reference to one chunk of one document in the store.
///
/// Ordering follows store position, then chunk ordinal, which is
/// also the order documents and chunks were first indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkRef {
    /// Position of the document in the store
    pub doc: usize,

    /// Position of the chunk within the document
    pub chunk: usize,
}

impl ChunkRef {
    pub fn new(doc: usize, chunk: usize) -> Self {
        Self { doc, chunk }
    }
}

/// A ranked chunk returned by the retriever
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document path relative to the project root
    pub path: String,

    /// Document filename
    pub filename: String,

    /// Chunk text
    pub content: String,

    /// Lexical overlap score in [0, 1]
    pub score: f64,
}

/// Parameters of an indexing call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexParams {
    /// Directory to index, relative to the project root (or absolute inside it)
    pub directory: String,

    /// Extensions to include (without dot). Defaults to the configured set.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    /// Maximum number of files to index
    #[serde(default)]
    pub max_files: Option<usize>,

    /// Substrings that exclude a directory entry by name
    #[serde(default)]
    pub exclude_patterns: Option<Vec<String>>,
}

impl IndexParams {
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
}

/// Statistics from an indexing operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexReport {
    /// Number of files indexed by this call
    pub indexed_count: usize,

    /// Number of candidate files that could not be read
    pub skipped: usize,

    /// Documents in the store after the call
    pub total_documents: usize,

    /// Chunks in the store after the call
    pub total_chunks: usize,

    /// First indexed paths (at most 20)
    pub files: Vec<String>,

    /// Indexing duration in milliseconds
    pub duration_ms: u64,
}

/// One source chunk that fed a generated answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub file: String,
    pub path: String,
    /// Rounded percentage, e.g. `"50%"`
    pub relevance: String,
}

/// Generated answer with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub response: String,
    pub sources_used: Vec<SourceRef>,
    pub total_indexed: usize,
}

/// Per-file entry of a status report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStatus {
    pub path: String,
    pub chunks: usize,
}

/// Snapshot of the engine's state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub indexed: bool,
    pub documents: usize,
    pub total_chunks: usize,
    pub last_updated: Option<DateTime<Utc>>,
    pub files: Vec<FileStatus>,
}
