//! Local-clone ingestion strategy
//!
//! Shallow-clones the repository into a scratch directory, walks the
//! checkout, and caches the result per source URL for a short validity
//! window. The scratch directory is removed on every exit path by its
//! RAII guard.

use crate::domain::{RepoRef, RetrievedFile};
use crate::fetch::cache::IngestionCache;
use crate::fetch::error::IngestionError;
use crate::fetch::scratch::ScratchDir;
use crate::fetch::Ingestor;
use crate::scan::{walk_repository, EligibilityPolicy};
use git2::{build::RepoBuilder, FetchOptions, Repository};
use std::path::Path;
use std::sync::Arc;

pub struct CloneIngestor {
    policy: EligibilityPolicy,
    cache: Arc<IngestionCache>,
}

impl CloneIngestor {
    pub fn new(policy: EligibilityPolicy, cache: Arc<IngestionCache>) -> Self {
        Self { policy, cache }
    }
}

impl Ingestor for CloneIngestor {
    fn fetch(
        &self,
        reference: &RepoRef,
        source_url: &str,
    ) -> Result<Vec<RetrievedFile>, IngestionError> {
        if let Some(files) = self.cache.get(source_url) {
            tracing::debug!(url = source_url, "ingestion cache hit, skipping clone");
            return Ok(files);
        }

        let scratch = ScratchDir::create(reference)
            .map_err(|e| IngestionError::CloneFailed(e.to_string()))?;

        let clone_url = normalize_clone_url(source_url);
        clone_repository(&clone_url, scratch.path())?;

        let files = walk_repository(scratch.path(), &self.policy)
            .map_err(|e| IngestionError::CloneFailed(e.to_string()))?;

        self.cache.put(source_url, files.clone());
        Ok(files)
        // scratch guard drops here; cleanup failure is logged, not raised
    }
}

/// Normalize a repository URL to the canonical `.git` clone form.
///
/// Local `file://` URLs (used in tests) pass through untouched.
fn normalize_clone_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.starts_with("file://") || trimmed.ends_with(".git") {
        trimmed.to_string()
    } else {
        format!("{trimmed}.git")
    }
}

/// Shallow (depth-1) clone, falling back to a full clone when the
/// transport rejects shallow fetches.
fn clone_repository(url: &str, dest: &Path) -> Result<(), IngestionError> {
    let mut fo = FetchOptions::new();
    fo.depth(1);
    let mut builder = RepoBuilder::new();
    builder.fetch_options(fo);

    match builder.clone(url, dest) {
        Ok(_) => Ok(()),
        Err(shallow_err) => {
            tracing::debug!("shallow clone failed ({shallow_err}), retrying full clone");
            // a failed shallow attempt can leave partial state behind
            let _ = std::fs::remove_dir_all(dest);
            std::fs::create_dir_all(dest)
                .map_err(|e| IngestionError::CloneFailed(e.to_string()))?;
            match Repository::clone(url, dest) {
                Ok(_) => Ok(()),
                Err(e) => Err(classify_clone_error(e.message(), url)),
            }
        }
    }
}

/// Map a clone failure message to the taxonomy: missing repositories are
/// `NotFound`, everything else surfaces verbatim as `CloneFailed`.
fn classify_clone_error(message: &str, url: &str) -> IngestionError {
    let lower = message.to_ascii_lowercase();
    if lower.contains("404") || lower.contains("not found") || lower.contains("does not exist") {
        IngestionError::NotFound(format!("{url}: {message}"))
    } else {
        IngestionError::CloneFailed(message.to_string())
    }
}
