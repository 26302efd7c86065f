//! UTF-8 safe text chunking.
//!
//! Implements character-based chunking that never panics on
//! multi-byte UTF-8 sequences. Unlike byte-based chunking,
//! which can split UTF-8 characters and cause panics, this
//! implementation uses `char_indices()` to ensure all chunk
//! boundaries fall on valid character boundaries.
//!
//! # Example
//!
//! ```
//! use coderag::core::indexer::Chunker;
//!
//! let chunker = Chunker::new(512, 64).unwrap();
//! let text = "Hello 👋 World 🌍";
//! let chunks = chunker.chunk_text(text, "deadbeef");
//!
//! // All chunks are valid UTF-8, never panics
//! for chunk in chunks {
//!     assert!(std::str::from_utf8(chunk.content.as_bytes()).is_ok());
//! }
//! ```

use crate::core::error::{RagError, Result};
use crate::core::types::Chunk;

/// UTF-8 safe text chunker.
///
/// Splits text into fixed-size chunks with configurable overlap.
/// All sizes and offsets are measured in **characters**, not bytes.
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Number of characters per chunk
    chunk_size: usize,

    /// Number of characters to overlap between consecutive chunks
    overlap: usize,
}

impl Chunker {
    /// Create a new chunker with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `chunk_size` is 0 or if
    /// `overlap >= chunk_size` (the window would never advance).
    ///
    /// # Example
    ///
    /// ```
    /// use coderag::core::indexer::Chunker;
    ///
    /// let chunker = Chunker::new(1000, 200).unwrap();
    /// assert_eq!(chunker.chunk_size(), 1000);
    /// assert_eq!(chunker.overlap(), 200);
    /// assert!(Chunker::new(10, 10).is_err());
    /// ```
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(RagError::ConfigError(
                "chunk_size must be > 0".to_string(),
            ));
        }
        if overlap >= chunk_size {
            return Err(RagError::ConfigError(format!(
                "overlap ({overlap}) must be < chunk_size ({chunk_size})"
            )));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Get the chunk size in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the overlap size in characters.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Chunk text into overlapping segments.
    ///
    /// Windows start every `chunk_size - overlap` characters. The
    /// last window ends exactly at the end of the text, so no
    /// trailing chunk consists solely of overlap.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to chunk
    /// * `doc_id` - Owning document id, used to build chunk ids
    ///
    /// # Returns
    ///
    /// Chunks in increasing offset order, each carrying its content,
    /// a lowercased copy and character offsets `[start, end)`.
    pub fn chunk_text(&self, text: &str, doc_id: &str) -> Vec<Chunk> {
        // (byte offset, char) pairs; slicing only ever happens at
        // these byte offsets
        let char_indices: Vec<(usize, char)> = text.char_indices().collect();
        let total_chars = char_indices.len();

        if total_chars == 0 {
            return Vec::new();
        }

        let step = self.chunk_size - self.overlap;
        let mut chunks = Vec::new();
        let mut char_start = 0;

        loop {
            let char_end = (char_start + self.chunk_size).min(total_chars);

            let byte_start = char_indices[char_start].0;
            let byte_end = if char_end < total_chars {
                char_indices[char_end].0
            } else {
                text.len()
            };

            let content = &text[byte_start..byte_end];

            chunks.push(Chunk {
                id: format!("{doc_id}-{}", chunks.len()),
                content: content.to_string(),
                lowercase_content: content.to_lowercase(),
                start_offset: char_start,
                end_offset: char_end,
            });

            if char_end == total_chars {
                break;
            }
            char_start += step;
        }

        chunks
    }
}
