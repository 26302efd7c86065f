//! On-disk snapshot of the document store and inverted index.
//!
//! # File format
//!
//! ```json
//! {
//!   "version": 1,
//!   "lastUpdated": "2026-01-01T00:00:00Z",
//!   "documents": [ ... ],
//!   "invertedIndex": { "token": [{"doc": 0, "chunk": 0}] }
//! }
//! ```
//!
//! The inverted index is derived data. On load it is rebuilt from
//! `documents`, and a stored section that differs from the rebuilt one
//! is reported as stale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{RagError, Result};
use crate::core::storage::{DocumentStore, InvertedIndex};
use crate::core::types::Document;

/// Current snapshot schema version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Borrowed view written to disk
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotView<'a> {
    version: u32,
    last_updated: Option<DateTime<Utc>>,
    documents: &'a [Document],
    inverted_index: &'a InvertedIndex,
}

/// Raw file contents; the index is decoded separately so a bad index
/// section does not lose the documents
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    last_updated: Option<DateTime<Utc>>,
    documents: Vec<Document>,
    #[serde(default)]
    inverted_index: Option<serde_json::Value>,
}

/// State restored from a snapshot file
#[derive(Debug)]
pub struct Snapshot {
    pub store: DocumentStore,
    pub index: InvertedIndex,
    pub last_updated: Option<DateTime<Utc>>,
    /// True when the stored index section was missing or did not match
    /// the documents
    pub index_rebuilt: bool,
}

/// Reads and writes one snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write the snapshot, creating the parent directory if needed
    pub fn save(
        &self,
        store: &DocumentStore,
        index: &InvertedIndex,
        last_updated: Option<DateTime<Utc>>,
    ) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let view = SnapshotView {
            version: SNAPSHOT_VERSION,
            last_updated,
            documents: store.documents(),
            inverted_index: index,
        };
        let json = serde_json::to_string(&view)?;
        fs::write(&self.path, json)?;

        tracing::debug!(
            "Saved snapshot with {} documents to {:?}",
            store.len(),
            self.path
        );
        Ok(())
    }

    /// Load the snapshot, or `None` if the file does not exist
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let raw: RawSnapshot = serde_json::from_str(&contents)?;
        if let Some(version) = raw.version {
            if version > SNAPSHOT_VERSION {
                return Err(RagError::StorageError(format!(
                    "snapshot version {version} is newer than supported version {SNAPSHOT_VERSION}"
                )));
            }
        }

        let store = DocumentStore::from_documents(raw.documents);

        // The index is always rebuilt from `documents`; the stored copy
        // only tells us whether it was stale.
        let index = InvertedIndex::build(store.documents());
        let stored = raw
            .inverted_index
            .and_then(|value| serde_json::from_value::<InvertedIndex>(value).ok());
        let index_rebuilt = stored.as_ref() != Some(&index);
        if index_rebuilt {
            tracing::warn!(
                "Snapshot {:?} has a missing or stale inverted index, rebuilt from documents",
                self.path
            );
        }

        tracing::info!(
            "Loaded snapshot: {} documents, {} tokens",
            store.len(),
            index.token_count()
        );

        Ok(Some(Snapshot {
            store,
            index,
            last_updated: raw.last_updated,
            index_rebuilt,
        }))
    }

    /// Delete the snapshot file. Succeeds if it is already absent.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Removed snapshot {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
