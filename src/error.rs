use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultGraphError {
    #[error("failed to read document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write graph to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("graph (de)serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("graph file differs from the built graph at node {index}: expected {expected}, found {found}")]
    RoundTrip {
        index: usize,
        expected: String,
        found: String,
    },
}

pub type Result<T> = std::result::Result<T, VaultGraphError>;
