//! Repository ingestion: two interchangeable strategies behind one contract
//!
//! The caller observes a single entry point and a single error taxonomy;
//! which strategy runs (remote tree API vs. local clone) is deployment
//! configuration, not caller choice.

pub mod api;
pub mod cache;
pub mod clone;
pub mod error;
pub mod reference;
pub mod scratch;

pub use api::ApiIngestor;
pub use cache::{shared_cache, IngestionCache};
pub use clone::CloneIngestor;
pub use error::IngestionError;
pub use reference::resolve;
pub use scratch::ScratchDir;

use crate::config::{Config, Strategy};
use crate::domain::{RepoRef, RetrievedFile};
use std::time::Duration;

/// Capability interface implemented by both ingestion strategies.
///
/// `source_url` is the caller-supplied URL; the clone strategy keys its
/// cache by it, the API strategy works from the parsed reference alone.
pub trait Ingestor {
    fn fetch(
        &self,
        reference: &RepoRef,
        source_url: &str,
    ) -> Result<Vec<RetrievedFile>, IngestionError>;
}

/// The single ingestion entry point.
///
/// Either a complete (possibly filtered) file list comes back, or exactly
/// one [`IngestionError`] — never a partial result with an error attached.
pub fn get_repository_files(
    url: &str,
    config: &Config,
) -> Result<Vec<RetrievedFile>, IngestionError> {
    let reference =
        resolve(url).ok_or_else(|| IngestionError::InvalidReference(url.to_string()))?;
    tracing::info!(%reference, strategy = %config.strategy, "ingesting repository");

    let policy = config.eligibility_policy();
    match config.strategy {
        Strategy::Api => {
            let ingestor =
                ApiIngestor::new(policy, Duration::from_secs(config.http_timeout_secs))?;
            ingestor.fetch(&reference, url)
        }
        Strategy::Clone => CloneIngestor::new(policy, shared_cache()).fetch(&reference, url),
    }
}
