//! The RAG engine: the one service every adapter shares.
//!
//! `RagEngine` owns the document store, the inverted index and the
//! snapshot file. It is constructed once and shared via `Arc`.
//!
//! # Locking
//!
//! - `writer` (`tokio::sync::Mutex`) serializes whole indexing and
//!   clear calls, including their file I/O.
//! - `state` (`std::sync::RwLock`) guards the store and index. Queries
//!   take the read lock; the writer takes the write lock only to apply
//!   finished batch results and rebuild the index. No guard on `state`
//!   is ever held across an `.await`.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use crate::core::completion::{CompletionProvider, OpenAiCompatibleProvider};
use crate::core::config::Config;
use crate::core::error::{RagError, Result};
use crate::core::indexer::{FileWalker, IndexingPipeline};
use crate::core::search::{validate_query, ContextAssembler, Retriever};
use crate::core::security::confine;
use crate::core::storage::{DocumentStore, InvertedIndex, SnapshotStore};
use crate::core::types::{
    Answer, FileStatus, IndexParams, IndexReport, SearchHit, StatusReport,
};

/// Number of indexed paths echoed back in an [`IndexReport`]
pub const REPORT_FILE_LIMIT: usize = 20;

#[derive(Debug, Default)]
struct IndexState {
    store: DocumentStore,
    index: InvertedIndex,
    last_updated: Option<DateTime<Utc>>,
}

/// Codebase indexing and retrieval engine
pub struct RagEngine {
    config: Arc<Config>,
    project_root: PathBuf,
    pipeline: IndexingPipeline,
    state: RwLock<IndexState>,
    writer: tokio::sync::Mutex<()>,
    snapshots: Option<SnapshotStore>,
    assembler: ContextAssembler,
}

impl RagEngine {
    /// Create an engine answering through the configured HTTP endpoint
    pub fn new(config: Config) -> Result<Self> {
        let provider = OpenAiCompatibleProvider::from_config(&config.completion)?;
        Self::with_provider(config, Arc::new(provider))
    }

    /// Create an engine with an explicit completion provider.
    ///
    /// Restores the snapshot when persistence is enabled. A snapshot
    /// that cannot be read is logged and the engine starts empty.
    pub fn with_provider(config: Config, provider: Arc<dyn CompletionProvider>) -> Result<Self> {
        config.validate()?;

        let project_root = config.project_root()?;
        let pipeline = IndexingPipeline::new(
            config.indexing.chunk_size,
            config.indexing.overlap,
            config.indexing.batch_size,
            config.indexing.preview_chars,
        )?;

        let snapshots = if config.snapshot.enabled {
            Some(SnapshotStore::new(config.snapshot_path()?))
        } else {
            None
        };

        let state = match snapshots.as_ref().map(SnapshotStore::load) {
            Some(Ok(Some(snapshot))) => IndexState {
                store: snapshot.store,
                index: snapshot.index,
                last_updated: snapshot.last_updated,
            },
            Some(Err(e)) => {
                tracing::warn!("Failed to load snapshot, starting empty: {}", e);
                IndexState::default()
            }
            Some(Ok(None)) | None => IndexState::default(),
        };

        tracing::info!(
            "RAG engine ready: root {:?}, {} documents, completion via {}",
            project_root,
            state.store.len(),
            provider.name()
        );

        Ok(Self {
            config: Arc::new(config),
            project_root,
            pipeline,
            state: RwLock::new(state),
            writer: tokio::sync::Mutex::new(()),
            snapshots,
            assembler: ContextAssembler::new(provider),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Snapshot file location, if persistence is enabled
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshots.as_ref().map(SnapshotStore::path)
    }

    /// Index a directory under the project root.
    ///
    /// Files already in the store (same relative path) are replaced in
    /// place; new files are appended. The inverted index is rebuilt
    /// from the whole store before returning.
    pub async fn index_directory(&self, params: IndexParams) -> Result<IndexReport> {
        let _writer = self.writer.lock().await;
        let start = Instant::now();

        let directory = confine(&params.directory, &self.project_root)?;
        match tokio::fs::metadata(&directory).await {
            Ok(meta) if meta.is_dir() => {}
            _ => return Err(RagError::DirectoryNotFound(params.directory.clone())),
        }

        let indexing = &self.config.indexing;
        let walker = FileWalker::new(
            params
                .extensions
                .unwrap_or_else(|| indexing.extensions.clone()),
            params
                .exclude_patterns
                .unwrap_or_else(|| indexing.exclude_patterns.clone()),
            params.max_files.unwrap_or(indexing.max_files),
            indexing.max_depth,
            indexing.max_file_size_mb,
        );

        tracing::info!("Starting file collection from {:?}", directory);
        let walk_root = directory.clone();
        let files = tokio::task::spawn_blocking(move || walker.collect_files(&walk_root))
            .await
            .map_err(|e| RagError::StorageError(format!("Directory walk failed: {e}")))?;
        tracing::info!("Found {} files to index", files.len());

        let output = self
            .pipeline
            .build_documents(&self.project_root, &files)
            .await;

        let indexed_paths: Vec<String> =
            output.documents.iter().map(|d| d.path.clone()).collect();

        let (total_documents, total_chunks) = {
            let mut state = self.write_state()?;
            for document in output.documents {
                state.store.upsert(document);
            }
            state.index = InvertedIndex::build(state.store.documents());
            state.last_updated = Some(Utc::now());
            (state.store.len(), state.store.total_chunks())
        };

        self.persist().await;

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Indexing complete: {} files indexed, {} skipped, {} documents / {} chunks total in {}ms",
            indexed_paths.len(),
            output.skipped,
            total_documents,
            total_chunks,
            duration_ms
        );

        Ok(IndexReport {
            indexed_count: indexed_paths.len(),
            skipped: output.skipped,
            total_documents,
            total_chunks,
            files: indexed_paths.into_iter().take(REPORT_FILE_LIMIT).collect(),
            duration_ms,
        })
    }

    /// Rank stored chunks against `query`.
    ///
    /// `top_k` defaults to the configured value and is capped at
    /// `max_top_k`.
    pub fn search(&self, query: &str, top_k: Option<usize>) -> Result<Vec<SearchHit>> {
        let query = validate_query(query, self.config.search.max_query_length)?;
        let top_k = self.resolve_top_k(top_k)?;

        let state = self.read_state()?;
        Ok(Retriever::new(&state.store, &state.index, self.config.search.min_score)
            .search(query, top_k))
    }

    /// Retrieve context for `query` and generate an answer from it
    pub async fn answer(
        &self,
        query: &str,
        model: Option<&str>,
        top_k: Option<usize>,
    ) -> Result<Answer> {
        let query = validate_query(query, self.config.search.max_query_length)?;
        let top_k = self.resolve_top_k(top_k)?;

        let (hits, total_indexed) = {
            let state = self.read_state()?;
            if state.store.is_empty() {
                return Err(RagError::NotIndexed);
            }
            let hits = Retriever::new(&state.store, &state.index, self.config.search.min_score)
                .search(query, top_k);
            (hits, state.store.len())
        };

        let model = model.unwrap_or(&self.config.completion.default_model);
        self.assembler
            .answer(query, model, &hits, total_indexed)
            .await
    }

    /// Current store contents
    pub fn status(&self) -> Result<StatusReport> {
        let state = self.read_state()?;
        Ok(StatusReport {
            indexed: !state.store.is_empty(),
            documents: state.store.len(),
            total_chunks: state.store.total_chunks(),
            last_updated: state.last_updated,
            files: state
                .store
                .documents()
                .iter()
                .map(|d| FileStatus {
                    path: d.path.clone(),
                    chunks: d.chunks.len(),
                })
                .collect(),
        })
    }

    /// Number of documents in the store
    pub fn document_count(&self) -> Result<usize> {
        Ok(self.read_state()?.store.len())
    }

    /// Empty the store and index and delete the snapshot file
    pub async fn clear(&self) -> Result<()> {
        let _writer = self.writer.lock().await;

        {
            let mut state = self.write_state()?;
            state.store.clear();
            state.index.clear();
            state.last_updated = None;
        }

        if let Some(snapshots) = &self.snapshots {
            if let Err(e) = snapshots.clear() {
                tracing::warn!("Failed to remove snapshot {:?}: {}", snapshots.path(), e);
            }
        }

        tracing::info!("Index cleared");
        Ok(())
    }

    fn resolve_top_k(&self, top_k: Option<usize>) -> Result<usize> {
        let top_k = top_k.unwrap_or(self.config.search.default_top_k);
        if top_k == 0 {
            return Err(RagError::InvalidQuery("topK must be at least 1".to_string()));
        }
        Ok(top_k.min(self.config.search.max_top_k))
    }

    /// Write the snapshot on the blocking pool; failures are logged,
    /// never returned
    async fn persist(&self) {
        let Some(snapshots) = self.snapshots.clone() else {
            return;
        };

        let copy = match self.read_state() {
            Ok(state) => (state.store.clone(), state.index.clone(), state.last_updated),
            Err(e) => {
                tracing::warn!("Failed to save snapshot {:?}: {}", snapshots.path(), e);
                return;
            }
        };

        let path = snapshots.path().to_path_buf();
        let result = tokio::task::spawn_blocking(move || {
            let (store, index, last_updated) = copy;
            snapshots.save(&store, &index, last_updated)
        })
        .await
        .map_err(|e| RagError::StorageError(format!("Snapshot task failed: {e}")))
        .and_then(|saved| saved);

        if let Err(e) = result {
            tracing::warn!("Failed to save snapshot {:?}: {}", path, e);
        }
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, IndexState>> {
        self.state
            .read()
            .map_err(|_| RagError::StorageError("index state lock poisoned".to_string()))
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, IndexState>> {
        self.state
            .write()
            .map_err(|_| RagError::StorageError("index state lock poisoned".to_string()))
    }
}
