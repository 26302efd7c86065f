//! Candidate retrieval and lexical overlap scoring.

use std::cmp::Ordering;

use crate::core::search::tokenize;
use crate::core::storage::{DocumentStore, InvertedIndex};
use crate::core::types::{ChunkRef, SearchHit};

/// Default score threshold; hits at or below it are dropped
pub const DEFAULT_MIN_SCORE: f64 = 0.1;

/// Read-only search over a store and its index
pub struct Retriever<'a> {
    store: &'a DocumentStore,
    index: &'a InvertedIndex,
    min_score: f64,
}

impl<'a> Retriever<'a> {
    pub fn new(store: &'a DocumentStore, index: &'a InvertedIndex, min_score: f64) -> Self {
        Self {
            store,
            index,
            min_score,
        }
    }

    /// Rank chunks for `query` and return at most `top_k` hits.
    ///
    /// A chunk's score is the fraction of query tokens (duplicates
    /// included) that occur as substrings of its lowercase content.
    /// Ties keep store order, then chunk order.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit> {
        let tokens = tokenize(query);
        if tokens.is_empty() || top_k == 0 {
            return Vec::new();
        }

        let candidates = self.index.candidates(&tokens);
        let mut scored: Vec<(ChunkRef, f64)> = candidates
            .into_iter()
            .filter_map(|chunk_ref| {
                let (_, chunk) = self.store.resolve(chunk_ref)?;
                let matched = tokens
                    .iter()
                    .filter(|t| chunk.lowercase_content.contains(t.as_str()))
                    .count();
                let score = matched as f64 / tokens.len() as f64;
                (score > self.min_score).then_some((chunk_ref, score))
            })
            .collect();

        scored.sort_by(|(ref_a, score_a), (ref_b, score_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| ref_a.cmp(ref_b))
        });
        scored.truncate(top_k);

        tracing::debug!(
            "Query {:?}: {} tokens, {} hits",
            query,
            tokens.len(),
            scored.len()
        );

        scored
            .into_iter()
            .filter_map(|(chunk_ref, score)| {
                let (document, chunk) = self.store.resolve(chunk_ref)?;
                Some(SearchHit {
                    path: document.path.clone(),
                    filename: document.filename.clone(),
                    content: chunk.content.clone(),
                    score,
                })
            })
            .collect()
    }
}
