//! Short-lived in-memory ingestion cache
//!
//! Process-wide map keyed by source URL. Entries are replaced, never
//! merged, and expired entries are simply ignored on lookup; there is no
//! active sweeping. The cache is injectable so tests can assert hits
//! without performing a real clone.

use crate::domain::RetrievedFile;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Default validity window: 5 minutes.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Clone)]
struct CacheEntry {
    captured_at: DateTime<Utc>,
    files: Vec<RetrievedFile>,
}

#[derive(Debug)]
pub struct IngestionCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl IngestionCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Look up a fresh entry; expired entries are left in place and ignored.
    pub fn get(&self, source_url: &str) -> Option<Vec<RetrievedFile>> {
        let entries = self.entries.lock().expect("ingestion cache poisoned");
        let entry = entries.get(source_url)?;
        if Utc::now() - entry.captured_at < self.ttl {
            Some(entry.files.clone())
        } else {
            None
        }
    }

    /// Store a fresh capture, superseding any previous entry for the key.
    pub fn put(&self, source_url: &str, files: Vec<RetrievedFile>) {
        self.put_at(source_url, files, Utc::now());
    }

    /// Store with an explicit capture time. Exists so expiry is testable
    /// without sleeping through the validity window.
    pub fn put_at(&self, source_url: &str, files: Vec<RetrievedFile>, captured_at: DateTime<Utc>) {
        let mut entries = self.entries.lock().expect("ingestion cache poisoned");
        entries.insert(source_url.to_string(), CacheEntry { captured_at, files });
    }
}

/// The process-wide cache instance backing the CLI.
pub fn shared_cache() -> Arc<IngestionCache> {
    static SHARED: Lazy<Arc<IngestionCache>> =
        Lazy::new(|| Arc::new(IngestionCache::new(DEFAULT_CACHE_TTL_SECS)));
    Arc::clone(&SHARED)
}
