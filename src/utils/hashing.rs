//! Stable content hashing

use sha2::{Digest, Sha256};

/// Short stable identifier for file content: sha256 hex, first 16 chars.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    format!("{digest:x}")[..16].to_string()
}
