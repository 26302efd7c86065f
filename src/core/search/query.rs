//! Tokenization shared by indexing and retrieval.
//!
//! Text is lowercased and split on every run of characters that is
//! neither a letter nor a digit. Tokens of two characters or fewer are
//! dropped, which removes most operators and short keywords (`fn`,
//! `if`, `of`) from both the index and the query.

use crate::core::error::{RagError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled once at startup
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

/// Tokens shorter than or equal to this are discarded
pub const MIN_TOKEN_LEN: usize = 2;

/// Split `text` into lowercase alphanumeric tokens.
///
/// Duplicates are kept and order is preserved.
///
/// # Examples
///
/// ```
/// use coderag::core::search::tokenize;
///
/// assert_eq!(
///     tokenize("fn authenticateUser(id) -> Ok"),
///     vec!["authenticateuser"]
/// );
/// assert_eq!(tokenize("user user"), vec!["user", "user"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    SEPARATOR
        .split(&lowered)
        .filter(|t| t.chars().count() > MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Trim a raw query and enforce the length limit.
///
/// An empty query is valid; it simply produces no tokens.
pub fn validate_query(query: &str, max_length: usize) -> Result<&str> {
    let trimmed = query.trim();
    let length = trimmed.chars().count();
    if length > max_length {
        return Err(RagError::InvalidQuery(format!(
            "query is {length} characters, limit is {max_length}"
        )));
    }
    Ok(trimmed)
}
