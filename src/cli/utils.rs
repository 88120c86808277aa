//! Shared CLI utilities.

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::parse_csv;

    #[test]
    fn splits_and_trims() {
        let parsed = parse_csv(&Some(" a.rs, b.rs ,,c.rs ".to_string())).unwrap();
        assert_eq!(parsed, vec!["a.rs", "b.rs", "c.rs"]);
    }

    #[test]
    fn none_stays_none() {
        assert!(parse_csv(&None).is_none());
    }
}
