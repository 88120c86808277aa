//! Remote-tree ingestion via the GitHub REST API
//!
//! Resolves the default branch to a commit, lists the full recursive tree,
//! and fetches blob content per eligible entry. Blob fetches run
//! sequentially; a single undecodable blob is skipped, a quota-exhausted
//! response short-circuits the whole call with `RateLimited`.

use crate::domain::{RepoRef, RetrievedFile};
use crate::fetch::error::IngestionError;
use crate::fetch::Ingestor;
use crate::scan::EligibilityPolicy;
use base64::Engine as _;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const API_ROOT: &str = "https://api.github.com";
const RATELIMIT_REMAINING: &str = "x-ratelimit-remaining";

#[derive(Deserialize)]
struct RepoInfo {
    default_branch: String,
}

#[derive(Deserialize)]
struct BranchInfo {
    commit: CommitRef,
}

#[derive(Deserialize)]
struct CommitRef {
    sha: String,
}

#[derive(Deserialize)]
struct TreeListing {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    sha: String,
    #[serde(default)]
    size: Option<u64>,
}

#[derive(Deserialize)]
struct BlobPayload {
    content: String,
    encoding: String,
}

pub struct ApiIngestor {
    client: Client,
    policy: EligibilityPolicy,
}

impl ApiIngestor {
    pub fn new(policy: EligibilityPolicy, timeout: Duration) -> Result<Self, IngestionError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, "application/vnd.github.v3+json".parse().expect("static header"));
        headers.insert(USER_AGENT, "repo-prompt".parse().expect("static header"));
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if let Ok(value) = format!("Bearer {token}").parse() {
                headers.insert(AUTHORIZATION, value);
                tracing::debug!("using GITHUB_TOKEN for API requests");
            }
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| IngestionError::Provider(format!("failed building HTTP client: {e}")))?;

        Ok(Self { client, policy })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, IngestionError> {
        let resp = self.client.get(url).send().map_err(classify_transport_error)?;
        let resp = check_status(resp, url)?;
        resp.json()
            .map_err(|e| IngestionError::Provider(format!("malformed response from {url}: {e}")))
    }

    /// Fetch one blob and decode it. `Ok(None)` means the blob could not
    /// be decoded as text and the entry should be skipped; transport and
    /// status failures propagate.
    fn fetch_blob(&self, reference: &RepoRef, sha: &str) -> Result<Option<String>, IngestionError> {
        let url =
            format!("{API_ROOT}/repos/{}/{}/git/blobs/{sha}", reference.owner, reference.name);
        let payload: BlobPayload = self.get_json(&url)?;
        Ok(decode_blob(&payload))
    }
}

impl Ingestor for ApiIngestor {
    fn fetch(
        &self,
        reference: &RepoRef,
        _source_url: &str,
    ) -> Result<Vec<RetrievedFile>, IngestionError> {
        let repo_url = format!("{API_ROOT}/repos/{}/{}", reference.owner, reference.name);
        let repo: RepoInfo = self.get_json(&repo_url)?;
        tracing::debug!(branch = %repo.default_branch, "resolved default branch");

        let branch: BranchInfo =
            self.get_json(&format!("{repo_url}/branches/{}", repo.default_branch))?;
        let commit_sha = branch.commit.sha;

        let listing: TreeListing =
            self.get_json(&format!("{repo_url}/git/trees/{commit_sha}?recursive=1"))?;
        if listing.truncated {
            tracing::warn!(%reference, "provider truncated the recursive tree listing");
        }

        collect_eligible_blobs(&listing.tree, &self.policy, |entry| {
            self.fetch_blob(reference, &entry.sha)
        })
    }
}

/// Fold over tree entries: accumulate successes, drop undecodable blobs.
///
/// Eligibility is checked on tree metadata before `fetch_blob` runs, so
/// filtered entries cost no transfer. A blob that decodes to `None` is
/// skipped and logged; a fetch error aborts the whole call.
fn collect_eligible_blobs<F>(
    entries: &[TreeEntry],
    policy: &EligibilityPolicy,
    mut fetch_blob: F,
) -> Result<Vec<RetrievedFile>, IngestionError>
where
    F: FnMut(&TreeEntry) -> Result<Option<String>, IngestionError>,
{
    let mut files = Vec::new();
    for entry in entries {
        if entry.kind != "blob" {
            continue;
        }
        let size = entry.size.unwrap_or(0);
        if !policy.allows(&entry.path, size) {
            tracing::debug!(path = %entry.path, size, "filtered out by eligibility policy");
            continue;
        }
        match fetch_blob(entry)? {
            Some(content) => files.push(RetrievedFile {
                path: entry.path.clone(),
                content,
                content_hash: entry.sha.clone(),
                size_bytes: size,
            }),
            None => {
                tracing::warn!(path = %entry.path, "skipping undecodable blob");
            }
        }
    }
    Ok(files)
}

/// Decode a blob payload from its transport encoding into text.
///
/// Returns `None` (skip the entry) when the encoding is unexpected, the
/// base64 is corrupt, or the decoded bytes are not text.
fn decode_blob(payload: &BlobPayload) -> Option<String> {
    if payload.encoding != "base64" {
        return None;
    }
    // GitHub wraps blob content in newlines
    let cleaned: String = payload.content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD.decode(cleaned).ok()?;
    crate::utils::decode_text(&bytes)
}

fn classify_transport_error(e: reqwest::Error) -> IngestionError {
    if e.is_timeout() {
        IngestionError::Timeout(e.to_string())
    } else {
        IngestionError::Provider(e.to_string())
    }
}

fn check_status(resp: Response, url: &str) -> Result<Response, IngestionError> {
    let remaining = resp
        .headers()
        .get(RATELIMIT_REMAINING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    match classify_status(resp.status().as_u16(), remaining.as_deref(), url) {
        None => Ok(resp),
        Some(err) => Err(err),
    }
}

/// Map a response status (plus the rate-limit header) to an error, or
/// `None` for success. Quota exhaustion is reported distinctly so callers
/// can tell "try again later" from "does not exist".
fn classify_status(
    status: u16,
    ratelimit_remaining: Option<&str>,
    url: &str,
) -> Option<IngestionError> {
    match status {
        200..=299 => None,
        429 => Some(IngestionError::RateLimited),
        403 if ratelimit_remaining == Some("0") => Some(IngestionError::RateLimited),
        404 => Some(IngestionError::NotFound(url.to_string())),
        _ => Some(IngestionError::Provider(format!("unexpected status {status} from {url}"))),
    }
}
