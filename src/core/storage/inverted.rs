//! Token to chunk postings.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::core::search::tokenize;
use crate::core::types::{ChunkRef, Document};

/// Maps each lowercase token to the chunks that contain it.
///
/// A chunk is posted under every token of its own lowercase content
/// and every token of its document's filename, so a query naming a
/// file matches all of that file's chunks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    postings: HashMap<String, BTreeSet<ChunkRef>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from scratch over `documents` in store order.
    pub fn build(documents: &[Document]) -> Self {
        let mut index = Self::new();
        for (doc_pos, document) in documents.iter().enumerate() {
            let filename_tokens = tokenize(&document.filename);
            for (chunk_pos, chunk) in document.chunks.iter().enumerate() {
                let chunk_ref = ChunkRef::new(doc_pos, chunk_pos);
                for token in tokenize(&chunk.lowercase_content)
                    .into_iter()
                    .chain(filename_tokens.iter().cloned())
                {
                    index.postings.entry(token).or_default().insert(chunk_ref);
                }
            }
        }
        index
    }

    /// Postings for one token
    pub fn postings(&self, token: &str) -> Option<&BTreeSet<ChunkRef>> {
        self.postings.get(token)
    }

    /// Union of the postings of every token
    pub fn candidates(&self, tokens: &[String]) -> BTreeSet<ChunkRef> {
        let mut candidates = BTreeSet::new();
        for token in tokens {
            if let Some(refs) = self.postings.get(token) {
                candidates.extend(refs.iter().copied());
            }
        }
        candidates
    }

    /// Number of distinct tokens
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn clear(&mut self) {
        self.postings.clear();
    }
}
