use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use crate::domain::Document;
use crate::error::Result;
use crate::fs::read_document;

// `---`, then a `tags: ` line whose value runs (across newlines) to the next `\n---`.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)---\n\s*tags: (.*?)\n---").expect("valid tag pattern"));

// `[[Linked page]]` or `[[Linked page|alias]]`, on one line.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.*?)(?:\|.*?)?\]\]").expect("valid link pattern"));

/// Tags from the first `tags:` front-matter block, split on commas and trimmed.
///
/// Empty pieces are kept, so `tags: a, b,` yields `["a", "b", ""]`.
pub fn extract_tags(contents: &str) -> Vec<String> {
    match TAG_PATTERN.captures(contents) {
        Some(captures) => captures[1]
            .trim()
            .split(',')
            .map(|tag| tag.trim().to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// Distinct, trimmed targets of every wiki-link in `contents`. Aliases are ignored.
pub fn extract_links(contents: &str) -> BTreeSet<String> {
    LINK_PATTERN
        .captures_iter(contents)
        .map(|captures| captures[1].trim().to_string())
        .collect()
}

pub fn search_tags(path: &Path) -> Result<Vec<String>> {
    Ok(extract_tags(&read_document(path)?))
}

pub fn search_links(path: &Path) -> Result<BTreeSet<String>> {
    Ok(extract_links(&read_document(path)?))
}

/// Read `path` once and run both extractors over it.
pub fn extract_document(path: &Path) -> Result<Document> {
    let contents = read_document(path)?;
    Ok(Document {
        tags: extract_tags(&contents),
        links: extract_links(&contents),
    })
}
