//! Storage layer for the document corpus.
//!
//! # Architecture
//!
//! - **DocumentStore**: ordered documents with a path side map
//! - **InvertedIndex**: token to chunk postings, rebuilt after indexing
//! - **SnapshotStore**: JSON persistence of both
//!
//! # Snapshot location
//!
//! ```text
//! {project_root}/
//! └── .jules/
//!     └── rag-index.json      # documents + inverted index
//! ```

mod inverted;
mod snapshot;
mod store;

pub use inverted::InvertedIndex;
pub use snapshot::{Snapshot, SnapshotStore, SNAPSHOT_VERSION};
pub use store::DocumentStore;
