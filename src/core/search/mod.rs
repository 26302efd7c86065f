//! Keyword retrieval and context assembly.
//!
//! Queries are tokenized exactly like indexed text, candidates come
//! from the inverted index, and each candidate chunk is scored by the
//! fraction of query tokens it contains.

mod context;
mod query;
mod retriever;

pub use context::{build_context, relevance, system_prompt, ContextAssembler};
pub use query::{tokenize, validate_query, MIN_TOKEN_LEN};
pub use retriever::{Retriever, DEFAULT_MIN_SCORE};
