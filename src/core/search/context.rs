//! Prompt assembly and answer generation.
//!
//! Retrieved chunks are rendered as
//!
//! ```text
//! --- auth.js ---
//! function authenticateUser(user) { ... }
//!
//! --- session.js ---
//! ...
//! ```
//!
//! and embedded in a system instruction; the user's query is sent as
//! the prompt.

use std::sync::Arc;

use crate::core::completion::{CompletionProvider, CompletionRequest};
use crate::core::error::{RagError, Result};
use crate::core::types::{Answer, SearchHit, SourceRef};

/// Render hits as `--- <filename> ---` blocks separated by a blank line
pub fn build_context(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| format!("--- {} ---\n{}", hit.filename, hit.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// System instruction wrapping the retrieved context
pub fn system_prompt(context: &str) -> String {
    format!(
        "You are a coding assistant answering questions about a codebase.\n\
         Use only the code context below to answer. If the answer is not \
         in the context, say that it was not found in the indexed code.\n\n\
         CODE CONTEXT:\n{context}"
    )
}

/// Score as a rounded percentage, e.g. `0.5` -> `"50%"`
pub fn relevance(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

/// Turns retrieved hits into an answer through a completion provider
#[derive(Clone)]
pub struct ContextAssembler {
    provider: Arc<dyn CompletionProvider>,
}

impl ContextAssembler {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate an answer for `query` from `hits` (in score order).
    ///
    /// # Errors
    ///
    /// `NoRelevantContext` if `hits` is empty; provider failures are
    /// returned as they are.
    pub async fn answer(
        &self,
        query: &str,
        model: &str,
        hits: &[SearchHit],
        total_indexed: usize,
    ) -> Result<Answer> {
        if hits.is_empty() {
            return Err(RagError::NoRelevantContext(query.to_string()));
        }

        let request = CompletionRequest {
            prompt: query.to_string(),
            system_prompt: system_prompt(&build_context(hits)),
            model: model.to_string(),
        };

        tracing::debug!(
            "Requesting completion from {} with {} context chunks",
            self.provider.name(),
            hits.len()
        );
        let response = self.provider.complete(request).await?;

        Ok(Answer {
            response: response.content,
            sources_used: hits
                .iter()
                .map(|hit| SourceRef {
                    file: hit.filename.clone(),
                    path: hit.path.clone(),
                    relevance: relevance(hit.score),
                })
                .collect(),
            total_indexed,
        })
    }
}
