//! Filesystem walk for the local-clone strategy

use crate::domain::RetrievedFile;
use crate::scan::eligibility::EligibilityPolicy;
use crate::utils::{content_hash, normalize_path, read_file_text};
use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

const GIT_DIR: &str = ".git";

/// Walk `root` and return every eligible regular file as a [`RetrievedFile`].
///
/// The version-control metadata directory is never descended into. Size is
/// stat'd and checked against the policy before the file is read. Files
/// whose content cannot be decoded as text are recorded with empty content
/// and empty hash rather than aborting the walk. Output is sorted by
/// relative path for deterministic ordering.
pub fn walk_repository(root: &Path, policy: &EligibilityPolicy) -> Result<Vec<RetrievedFile>> {
    let mut collected: Vec<(String, std::path::PathBuf, u64)> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.file_name().to_str().map(|n| n != GIT_DIR).unwrap_or(true));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = match entry.path().strip_prefix(root) {
            Ok(p) => normalize_path(&p.to_string_lossy()),
            Err(_) => continue,
        };

        let size = match entry.metadata() {
            Ok(m) => m.len(),
            Err(e) => {
                tracing::warn!(path = %rel_path, "stat failed, skipping: {e}");
                continue;
            }
        };

        if !policy.allows(&rel_path, size) {
            tracing::debug!(path = %rel_path, size, "filtered out by eligibility policy");
            continue;
        }

        collected.push((rel_path, entry.into_path(), size));
    }

    collected.sort_by(|a, b| a.0.cmp(&b.0));

    let mut files = Vec::with_capacity(collected.len());
    for (rel_path, abs_path, size) in collected {
        let (content, hash) = match read_file_text(&abs_path) {
            Some(text) => {
                let hash = content_hash(&text);
                (text, hash)
            }
            None => {
                tracing::warn!(path = %rel_path, "undecodable as text, recording empty content");
                (String::new(), String::new())
            }
        };
        files.push(RetrievedFile { path: rel_path, content, content_hash: hash, size_bytes: size });
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn walk_finds_files_in_sorted_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/lib.rs"), "pub fn x() {}").unwrap();
        fs::write(root.join("README.md"), "# readme").unwrap();
        fs::write(root.join("a.txt"), "alpha").unwrap();

        let files = walk_repository(root, &EligibilityPolicy::default()).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["README.md", "a.txt", "src/lib.rs"]);
    }

    #[test]
    fn walk_never_descends_into_git_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::write(root.join(".git/config"), "[core]").unwrap();
        fs::write(root.join(".git/objects/deadbeef"), "blob").unwrap();
        fs::write(root.join("main.py"), "print('hi')").unwrap();

        let files = walk_repository(root, &EligibilityPolicy::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "main.py");
    }

    #[test]
    fn walk_applies_eligibility_before_reading() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("logo.png"), [0u8; 4]).unwrap();
        fs::write(root.join("big.rs"), "x".repeat(2_000_000)).unwrap();
        fs::write(root.join("ok.rs"), "fn ok() {}").unwrap();

        let files = walk_repository(root, &EligibilityPolicy::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "ok.rs");
        assert_eq!(files[0].content, "fn ok() {}");
        assert!(!files[0].content_hash.is_empty());
    }

    #[test]
    fn undecodable_file_recorded_with_empty_content() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        // eligible extension but binary payload
        fs::write(root.join("blob.rs"), [0u8, 159, 146, 150]).unwrap();
        fs::write(root.join("fine.rs"), "fn fine() {}").unwrap();

        let files = walk_repository(root, &EligibilityPolicy::default()).unwrap();
        assert_eq!(files.len(), 2);
        let blob = files.iter().find(|f| f.path == "blob.rs").unwrap();
        assert_eq!(blob.content, "");
        assert_eq!(blob.content_hash, "");
        assert_eq!(blob.size_bytes, 4);
    }

    #[test]
    fn size_reflects_pre_filter_stat() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("f.md"), "12345").unwrap();

        let files = walk_repository(root, &EligibilityPolicy::default()).unwrap();
        assert_eq!(files[0].size_bytes, 5);
    }
}
