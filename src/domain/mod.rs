//! Core data model shared across ingestion and rendering

use serde::Serialize;

/// Identity of a hosted repository, parsed from a user-supplied URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One file returned by an ingestion strategy.
///
/// `path` is relative and slash-separated, unique within one ingestion
/// result. `size_bytes` is the pre-filter size reported by the source
/// (tree metadata or stat), recorded even when content retrieval was
/// skipped or failed. `content_hash` is an opaque identifier (git blob
/// sha for the API strategy, a sha256 prefix for the clone strategy) and
/// is empty when no content was decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetrievedFile {
    pub path: String,
    pub content: String,
    pub content_hash: String,
    pub size_bytes: u64,
}
