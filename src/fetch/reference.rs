//! Repository URL parsing

use crate::domain::RepoRef;

const EXPECTED_HOST: &str = "github.com";

/// Parse a user-supplied URL into a [`RepoRef`].
///
/// Accepts `http(s)://github.com/<owner>/<name>`, tolerating a trailing
/// slash, extra path segments (e.g. `/tree/main/src`), and a `.git`
/// suffix on the repository name. Anything else — other hosts, other
/// schemes, fewer than two path segments — yields `None`, which callers
/// surface as `InvalidReference`. Pure, no network access.
pub fn resolve(url: &str) -> Option<RepoRef> {
    let rest = url
        .trim()
        .strip_prefix("https://")
        .or_else(|| url.trim().strip_prefix("http://"))?;

    let (host, path) = rest.split_once('/')?;
    if !host.eq_ignore_ascii_case(EXPECTED_HOST) {
        return None;
    }

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let name = segments.next()?.trim_end_matches(".git");
    if name.is_empty() {
        return None;
    }

    Some(RepoRef {
        host: host.to_ascii_lowercase(),
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plain_repo_url() {
        let r = resolve("https://github.com/rust-lang/cargo").unwrap();
        assert_eq!(r.host, "github.com");
        assert_eq!(r.owner, "rust-lang");
        assert_eq!(r.name, "cargo");
    }

    #[test]
    fn resolves_with_git_suffix_and_trailing_slash() {
        let r = resolve("https://github.com/rust-lang/cargo.git/").unwrap();
        assert_eq!(r.name, "cargo");
    }

    #[test]
    fn resolves_with_extra_path_segments() {
        let r = resolve("https://github.com/rust-lang/cargo/tree/master/src").unwrap();
        assert_eq!(r.owner, "rust-lang");
        assert_eq!(r.name, "cargo");
    }

    #[test]
    fn accepts_http_scheme() {
        assert!(resolve("http://github.com/a/b").is_some());
    }

    #[test]
    fn rejects_wrong_host() {
        assert!(resolve("https://gitlab.com/a/b").is_none());
        assert!(resolve("https://example.com/a/b").is_none());
    }

    #[test]
    fn rejects_missing_segments() {
        assert!(resolve("https://github.com/onlyowner").is_none());
        assert!(resolve("https://github.com/").is_none());
        assert!(resolve("https://github.com").is_none());
    }

    #[test]
    fn rejects_non_url_input() {
        assert!(resolve("not a url").is_none());
        assert!(resolve("git@github.com:a/b.git").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn rejects_bare_git_suffix_name() {
        assert!(resolve("https://github.com/owner/.git").is_none());
    }
}
