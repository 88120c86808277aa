//! Prompt assembly
//!
//! Joins the selected files into one text artifact. The output format is a
//! compatibility surface: path markers, blank-line separators, and the
//! trimming behavior are all fixed.

use crate::domain::RetrievedFile;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct AssembleOptions {
    /// Prepend a `[path:<path>]` marker line to each file section.
    pub include_path: bool,
    /// Collapse every whitespace run to a single space and trim.
    pub minify: bool,
}

/// Assemble the selected files, in selection order, into one document.
///
/// Selected paths with no matching file are skipped. Sections are joined
/// by one blank line and the final result is trimmed.
pub fn assemble(
    files: &[RetrievedFile],
    selection: &[String],
    options: AssembleOptions,
) -> String {
    let mut sections = Vec::with_capacity(selection.len());

    for path in selection {
        let Some(file) = files.iter().find(|f| &f.path == path) else {
            tracing::debug!(path = %path, "selected path not in ingestion result, skipping");
            continue;
        };

        let content =
            if options.minify { minify(&file.content) } else { file.content.clone() };

        if options.include_path {
            sections.push(format!("[path:{}]\n{}", file.path, content));
        } else {
            sections.push(content);
        }
    }

    sections.join("\n\n").trim().to_string()
}

/// Collapse all whitespace runs to single spaces and trim.
pub fn minify(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Number of selected paths that resolve to a retrieved file — the section
/// count [`assemble`] produces for the same inputs.
pub fn matched_selection_count(files: &[RetrievedFile], selection: &[String]) -> usize {
    selection.iter().filter(|path| files.iter().any(|f| &f.path == *path)).count()
}
