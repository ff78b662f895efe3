use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One entry of the link graph: a scanned document or a placeholder for a
/// link target that matched no document title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub title: String,
    pub tags: Vec<String>,
    pub empty: bool,
    pub links: BTreeSet<String>,
}

impl Node {
    pub fn document(title: impl Into<String>, tags: Vec<String>, links: BTreeSet<String>) -> Self {
        Node {
            title: title.into(),
            tags,
            empty: false,
            links,
        }
    }

    pub fn placeholder(title: impl Into<String>) -> Self {
        Node {
            title: title.into(),
            tags: Vec::new(),
            empty: true,
            links: BTreeSet::new(),
        }
    }
}

/// Tags and outgoing links extracted from a single document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub tags: Vec<String>,
    pub links: BTreeSet<String>,
}
