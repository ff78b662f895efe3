use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::{debug, info, trace};

use crate::content::extract_document;
use crate::domain::Node;
use crate::error::{Result, VaultGraphError};
use crate::fs::{read_document, scan_vault, VaultScan};

/// Ordered node list, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.empty).count()
    }

    /// Append a document node followed by one placeholder per link that is
    /// not in `known_titles`.
    pub fn push_document(
        &mut self,
        title: &str,
        tags: Vec<String>,
        links: BTreeSet<String>,
        known_titles: &HashSet<&str>,
    ) {
        let missing: Vec<String> = links
            .iter()
            .filter(|link| !known_titles.contains(link.as_str()))
            .cloned()
            .collect();

        self.nodes.push(Node::document(title, tags, links));
        for link in missing {
            self.push_placeholder(link);
        }
    }

    pub fn push_placeholder(&mut self, title: String) {
        trace!("Placeholder node: {title}");
        self.nodes.push(Node::placeholder(title));
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that `other` holds the same `(title, empty)` sequence.
    pub fn verify_same_shape(&self, other: &Graph) -> Result<()> {
        let len = self.len().max(other.len());
        for index in 0..len {
            let expected = self.nodes.get(index).map(describe);
            let found = other.nodes.get(index).map(describe);
            if expected != found {
                return Err(VaultGraphError::RoundTrip {
                    index,
                    expected: expected.unwrap_or_else(|| "<end of graph>".to_string()),
                    found: found.unwrap_or_else(|| "<end of graph>".to_string()),
                });
            }
        }
        Ok(())
    }
}

fn describe(node: &Node) -> String {
    format!("({:?}, empty: {})", node.title, node.empty)
}

/// Scan `vault_path` and build the link graph.
///
/// The first document that cannot be read aborts the build.
pub fn build_graph(vault_path: &Path) -> Result<Graph> {
    build_graph_from_scan(&scan_vault(vault_path))
}

/// Build the link graph for an existing scan, resolving links against all of
/// its titles.
pub fn build_graph_from_scan(scan: &VaultScan) -> Result<Graph> {
    info!("Scanned titles: {:?}", scan.titles);

    let known_titles: HashSet<&str> = scan.titles.iter().map(String::as_str).collect();
    let mut graph = Graph::new();

    for (path, title) in scan.iter() {
        debug!("Extracting document: {}", path.display());
        let document = extract_document(path)?;
        graph.push_document(title, document.tags, document.links, &known_titles);
    }

    info!(
        documents = scan.len(),
        placeholders = graph.placeholder_count(),
        "Graph built"
    );
    Ok(graph)
}

/// Parse a previously written graph file.
pub fn load_graph(path: &Path) -> Result<Graph> {
    Graph::from_json(&read_document(path)?)
}
