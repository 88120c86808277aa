//! Path normalization

/// Normalize a repository-relative path to slash-separated form.
pub fn normalize_path(path: &str) -> String {
    let forward = path.replace('\\', "/");
    forward.strip_prefix("./").unwrap_or(&forward).to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_path;

    #[test]
    fn converts_backslashes() {
        assert_eq!(normalize_path(r"src\lib.rs"), "src/lib.rs");
    }

    #[test]
    fn strips_leading_dot_slash() {
        assert_eq!(normalize_path("./src/lib.rs"), "src/lib.rs");
    }

    #[test]
    fn leaves_clean_paths_alone() {
        assert_eq!(normalize_path("src/lib.rs"), "src/lib.rs");
    }
}
