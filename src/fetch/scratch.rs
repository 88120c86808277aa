//! Scoped scratch directory for clone operations

use crate::domain::RepoRef;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// A uniquely named temporary directory owned by exactly one ingestion
/// call. Removed on drop regardless of how the call exits; removal
/// failure is logged, never raised, and never masks the primary outcome.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Allocate under the OS temp dir. Uniqueness comes from repository
    /// identity plus pid and a nanosecond timestamp, so concurrent
    /// ingestions of different repositories cannot collide.
    pub fn create(reference: &RepoRef) -> Result<Self> {
        let nanos =
            SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
        let pid = std::process::id();
        let path = std::env::temp_dir().join(format!(
            "repo-prompt-{}-{}-{pid}-{nanos}",
            reference.owner, reference.name
        ));
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed creating scratch directory: {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            tracing::warn!(path = %self.path.display(), "scratch directory cleanup failed: {e}");
        }
    }
}
