//! File eligibility policy
//!
//! The single point of truth consulted by both ingestion strategies before
//! any content is retrieved. A file is rejected when its final extension
//! is in the ignore-set (case-insensitive) or its size exceeds the
//! ceiling; either check alone disqualifies.

use std::collections::HashSet;

/// Default size ceiling: 1 MiB.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 1_048_576;

/// Binary, media, and archive extensions that are never worth ingesting.
pub fn default_ignored_extensions() -> &'static [&'static str] {
    &[
        // images
        "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff", "psd",
        // audio / video
        "mp3", "wav", "flac", "ogg", "m4a", "mp4", "avi", "mov", "mkv", "webm",
        // archives
        "zip", "tar", "gz", "bz2", "xz", "7z", "rar", "jar", "war",
        // binaries and object code
        "exe", "dll", "so", "dylib", "bin", "o", "a", "class", "pyc", "wasm",
        // documents
        "pdf", "doc", "docx", "ppt", "pptx", "xls", "xlsx",
        // fonts
        "ttf", "otf", "woff", "woff2", "eot",
        // disk images
        "iso", "img", "dmg",
    ]
}

#[derive(Debug, Clone)]
pub struct EligibilityPolicy {
    ignored_extensions: HashSet<String>,
    max_file_bytes: u64,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::new(
            default_ignored_extensions().iter().map(|s| s.to_string()),
            DEFAULT_MAX_FILE_BYTES,
        )
    }
}

impl EligibilityPolicy {
    pub fn new(ignored: impl IntoIterator<Item = String>, max_file_bytes: u64) -> Self {
        Self {
            ignored_extensions: ignored
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            max_file_bytes,
        }
    }

    /// Pure predicate: no state changes, no I/O.
    pub fn allows(&self, path: &str, size_bytes: u64) -> bool {
        if size_bytes > self.max_file_bytes {
            return false;
        }
        match final_extension(path) {
            Some(ext) => !self.ignored_extensions.contains(&ext),
            None => true,
        }
    }
}

/// The last dot-delimited segment of the file name, lower-cased.
///
/// A dot in a directory component does not count, and names with no dot
/// (or only a leading dot, like `.gitignore`) have no extension.
fn final_extension(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some(("", _)) | None => None,
        Some((_, ext)) => Some(ext.to_ascii_lowercase()),
    }
}
