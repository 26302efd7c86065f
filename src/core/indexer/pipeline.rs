//! Indexing pipeline orchestration.
//!
//! Turns a list of candidate files into [`Document`]s:
//! 1. Read file contents in fixed-width concurrent batches
//! 2. Hash path + content into a document id
//! 3. Chunk text
//! 4. Build the document record
//!
//! Every read in a batch is issued at once and the whole batch is
//! awaited before the next one starts, so at most `batch_size` files
//! are open at a time.

use chrono::Utc;
use futures::future::join_all;
use std::path::{Component, Path, PathBuf};

use crate::core::error::Result;
use crate::core::indexer::{hasher, Chunker};
use crate::core::types::Document;

/// Documents built from one batch run plus the number of unreadable files
#[derive(Debug, Default)]
pub struct PipelineOutput {
    pub documents: Vec<Document>,
    pub skipped: usize,
}

/// Orchestrates reading and chunking of candidate files
#[derive(Debug, Clone)]
pub struct IndexingPipeline {
    chunker: Chunker,
    batch_size: usize,
    preview_chars: usize,
}

impl IndexingPipeline {
    /// Create a new indexing pipeline
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Size of chunks in characters
    /// * `overlap` - Overlap between chunks in characters
    /// * `batch_size` - Number of concurrent reads per batch (0 is treated as 1)
    /// * `preview_chars` - Length of the stored preview in characters
    pub fn new(
        chunk_size: usize,
        overlap: usize,
        batch_size: usize,
        preview_chars: usize,
    ) -> Result<Self> {
        Ok(Self {
            chunker: Chunker::new(chunk_size, overlap)?,
            batch_size: batch_size.max(1),
            preview_chars,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Read and chunk `files`, returning documents in input order.
    ///
    /// Paths are stored relative to `project_root`. Files that cannot
    /// be read (I/O error or non-UTF-8 content) are logged and counted
    /// in `skipped`.
    pub async fn build_documents(&self, project_root: &Path, files: &[PathBuf]) -> PipelineOutput {
        let mut output = PipelineOutput::default();
        let total_batches = files.len().div_ceil(self.batch_size);

        for (batch_idx, batch) in files.chunks(self.batch_size).enumerate() {
            tracing::debug!(
                "Reading batch {}/{} ({} files)",
                batch_idx + 1,
                total_batches,
                batch.len()
            );

            let reads = batch.iter().map(|path| async move {
                let result = tokio::fs::read_to_string(path).await;
                (path, result)
            });

            for (path, result) in join_all(reads).await {
                match result {
                    Ok(content) => {
                        let document = self.build_document(project_root, path, &content);
                        tracing::debug!(
                            "Indexed {} ({} chunks)",
                            document.path,
                            document.chunks.len()
                        );
                        output.documents.push(document);
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                        tracing::warn!("Skipping non-UTF-8 file: {:?}", path);
                        output.skipped += 1;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read {:?}: {}", path, e);
                        output.skipped += 1;
                    }
                }
            }
        }

        output
    }

    /// Build a document from file content already in memory
    pub fn build_document(&self, project_root: &Path, path: &Path, content: &str) -> Document {
        let relative = relative_path(project_root, path);
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| relative.clone());
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let id = hasher::identify(&relative, content);
        let chunks = self.chunker.chunk_text(content, &id);

        Document {
            id,
            path: relative,
            filename,
            extension,
            preview_content: content.chars().take(self.preview_chars).collect(),
            chunks,
            indexed_at: Utc::now(),
        }
    }
}

/// `/`-separated path of `path` relative to `root`.
///
/// Falls back to the full path when `path` is not under `root`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
