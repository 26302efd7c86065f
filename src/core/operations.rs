//! JSON-shaped operations shared by every adapter.
//!
//! Each function takes a plain parameter object and returns a plain
//! JSON value. Failures never escape as `Err`: they are reported as
//! `{"success": false, "error": "..."}` so a tool caller always gets a
//! well-formed result.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::error::RagError;
use crate::core::services::RagEngine;
use crate::core::types::IndexParams;

/// Parameters of `rag_query`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub query: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// Parameters of `rag_search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: String,
    #[serde(default)]
    pub top_k: Option<usize>,
}

fn failure(error: &RagError) -> Value {
    json!({
        "success": false,
        "error": error.message(),
    })
}

/// Index a directory under the project root
pub async fn rag_index_directory(engine: &RagEngine, params: IndexParams) -> Value {
    match engine.index_directory(params).await {
        Ok(report) => json!({
            "success": true,
            "indexed": report.indexed_count,
            "skipped": report.skipped,
            "totalDocuments": report.total_documents,
            "totalChunks": report.total_chunks,
            "files": report.files,
            "durationMs": report.duration_ms,
        }),
        Err(e) => {
            tracing::warn!("rag_index_directory failed: {}", e);
            failure(&e)
        }
    }
}

/// Answer a question from indexed code
pub async fn rag_query(engine: &RagEngine, params: QueryParams) -> Value {
    let model = params
        .model
        .clone()
        .unwrap_or_else(|| engine.config().completion.default_model.clone());

    match engine
        .answer(&params.query, Some(&model), params.top_k)
        .await
    {
        Ok(answer) => json!({
            "success": true,
            "response": answer.response,
            "model": model,
            "sourcesUsed": answer.sources_used,
            "totalIndexed": answer.total_indexed,
        }),
        Err(e) => {
            if e.is_not_found() {
                tracing::debug!("rag_query found nothing: {}", e);
            } else {
                tracing::warn!("rag_query failed: {}", e);
            }
            failure(&e)
        }
    }
}

/// Ranked chunks for a query, without generation
pub fn rag_search(engine: &RagEngine, params: SearchParams) -> Value {
    match engine.search(&params.query, params.top_k) {
        Ok(hits) => json!({
            "success": true,
            "query": params.query,
            "count": hits.len(),
            "results": hits,
        }),
        Err(e) => failure(&e),
    }
}

/// Store contents
pub fn rag_status(engine: &RagEngine) -> Value {
    match engine.status() {
        Ok(status) => json!({
            "indexed": status.indexed,
            "documents": status.documents,
            "totalChunks": status.total_chunks,
            "lastUpdated": status.last_updated,
            "files": status.files,
        }),
        Err(e) => failure(&e),
    }
}

/// Empty the store, index and snapshot
pub async fn rag_clear(engine: &RagEngine) -> Value {
    match engine.clear().await {
        Ok(()) => json!({
            "success": true,
            "message": "RAG index cleared",
        }),
        Err(e) => failure(&e),
    }
}
