//! In-memory document store keyed by path.

use std::collections::HashMap;

use crate::core::types::{Chunk, ChunkRef, Document};

/// Ordered collection of documents with a path to position side map.
///
/// Positions are stable: re-indexing a path replaces the document in
/// place, so a [`ChunkRef`]'s `doc` keeps meaning "the n-th distinct
/// path ever indexed" until the store is cleared.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    positions: HashMap<String, usize>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from documents in order. A repeated path replaces
    /// the earlier entry at its original position.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let mut store = Self::new();
        for document in documents {
            store.upsert(document);
        }
        store
    }

    /// Insert a document, or replace the one with the same path.
    ///
    /// Returns the document's position.
    pub fn upsert(&mut self, document: Document) -> usize {
        match self.positions.get(&document.path) {
            Some(&pos) => {
                self.documents[pos] = document;
                pos
            }
            None => {
                let pos = self.documents.len();
                self.positions.insert(document.path.clone(), pos);
                self.documents.push(document);
                pos
            }
        }
    }

    pub fn get(&self, pos: usize) -> Option<&Document> {
        self.documents.get(pos)
    }

    pub fn get_by_path(&self, path: &str) -> Option<&Document> {
        self.positions.get(path).and_then(|&pos| self.documents.get(pos))
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.positions.contains_key(path)
    }

    /// Resolve a chunk reference to its document and chunk
    pub fn resolve(&self, chunk_ref: ChunkRef) -> Option<(&Document, &Chunk)> {
        let document = self.documents.get(chunk_ref.doc)?;
        let chunk = document.chunks.get(chunk_ref.chunk)?;
        Some((document, chunk))
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn total_chunks(&self) -> usize {
        self.documents.iter().map(|d| d.chunks.len()).sum()
    }

    pub fn clear(&mut self) {
        self.documents.clear();
        self.positions.clear();
    }
}
