//! Ingestion error taxonomy
//!
//! Every ingestion call either returns a complete file list or exactly one
//! of these errors. Per-file decode failures and scratch-directory cleanup
//! failures are logged where they happen and never surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestionError {
    /// URL did not parse, wrong host, or missing owner/name segments.
    /// Non-retryable; the caller must correct the input.
    #[error("invalid repository URL: {0}")]
    InvalidReference(String),

    /// The hosting provider's request quota is exhausted. Never silently
    /// retried; the caller decides whether to try again later.
    #[error("provider rate limit exhausted; try again later")]
    RateLimited,

    /// The repository does not exist (or is private, which a public read
    /// cannot distinguish).
    #[error("repository not found: {0}")]
    NotFound(String),

    /// Cloning failed; carries the underlying message verbatim.
    #[error("clone failed: {0}")]
    CloneFailed(String),

    /// A network call exceeded its bounded timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Any other provider-side failure: transport error, unexpected
    /// status, or a response that did not match the expected shape.
    #[error("provider request failed: {0}")]
    Provider(String),
}
