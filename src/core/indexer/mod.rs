//! Document indexing module.
//!
//! Handles file traversal, text chunking and document identity.
//! Key features:
//!
//! - UTF-8 safe character-based chunking
//! - Configurable chunk size and overlap
//! - Deterministic file system walking with extension filtering
//! - Batched concurrent file reads
//!
//! # Safety
//!
//! The chunker uses character-based slicing via `char_indices()`
//! to ensure UTF-8 safety. This prevents panics when processing
//! files containing emojis, multi-byte characters, or other
//! special Unicode sequences.

pub mod chunker;
pub mod hasher;
pub mod pipeline;
pub mod walker;

pub use chunker::Chunker;
pub use hasher::identify;
pub use pipeline::{IndexingPipeline, PipelineOutput};
pub use walker::FileWalker;
