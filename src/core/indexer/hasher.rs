//! Content-addressed document identity.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest
const ID_LEN: usize = 8;

/// Stable identifier for a `(path, content)` pair.
///
/// First 8 hex characters of `SHA-256(path ++ content)`. The same file
/// at the same path with the same bytes always gets the same id.
pub fn identify(path: &str, content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())[..ID_LEN].to_string()
}
