use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::{Config, FileConfig};
use crate::fs::{scan_vault, write_output};

pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod fs;
pub mod graph;

pub use domain::{Document, Node};
pub use error::{Result, VaultGraphError};
pub use graph::{build_graph, build_graph_from_scan, load_graph, Graph};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the Obsidian vault [default: test_vault]
    #[arg(short, long)]
    pub vault_path: Option<PathBuf>,

    /// Path of the JSON graph file [default: graph.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// YAML file providing `vault_path` and `output`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not echo titles and JSON to stdout; log warnings and errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Reload the written graph file and verify it against the built graph
    #[arg(long)]
    pub check: bool,
}

impl Args {
    pub fn to_config(&self) -> Result<Config> {
        let file = self.config.as_deref().map(FileConfig::load).transpose()?;
        Ok(Config::resolve(
            file,
            self.vault_path.clone(),
            self.output.clone(),
            self.quiet,
        ))
    }
}

/// Build the graph for `config.vault_path` and write it to `config.output`.
///
/// The scanned titles are echoed before any document is read. Nothing is
/// written unless every document was read successfully.
pub fn build_graph_file(config: &Config) -> Result<Graph> {
    info!("Building graph for vault: {}", config.vault_path.display());

    let scan = scan_vault(&config.vault_path);
    if !config.quiet {
        println!("{:?}", scan.titles);
    }

    let graph = build_graph_from_scan(&scan)?;
    let json = graph.to_json_pretty()?;
    if !config.quiet {
        println!("{json}");
    }

    write_output(&config.output, &json)?;
    info!("Wrote graph: {}", config.output.display());
    Ok(graph)
}

/// Reload `config.output` and confirm it holds the same nodes as `graph`.
pub fn check_graph_file(config: &Config, graph: &Graph) -> Result<()> {
    let loaded = load_graph(&config.output)?;
    graph.verify_same_shape(&loaded)?;
    info!("Verified {} nodes in {}", loaded.len(), config.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet_config(dir: &TempDir) -> Config {
        Config {
            vault_path: dir.path().join("vault"),
            output: dir.path().join("out/graph.json"),
            quiet: true,
        }
    }

    #[test]
    fn writes_graph_file_and_checks_it() {
        let dir = TempDir::new().unwrap();
        let config = quiet_config(&dir);
        std::fs::create_dir_all(&config.vault_path).unwrap();
        std::fs::write(config.vault_path.join("A.md"), "[[B]]").unwrap();

        let graph = build_graph_file(&config).unwrap();
        assert_eq!(graph.len(), 2);

        let written = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(written, graph.to_json_pretty().unwrap());
        check_graph_file(&config, &graph).unwrap();
    }

    #[test]
    fn failed_build_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = quiet_config(&dir);
        std::fs::create_dir_all(&config.vault_path).unwrap();
        std::fs::write(config.vault_path.join("bad.md"), [0xc3, 0x28]).unwrap();

        assert!(build_graph_file(&config).is_err());
        assert!(!config.output.exists());
    }

    #[test]
    fn args_resolve_through_config_file() {
        let dir = TempDir::new().unwrap();
        let cfg = dir.path().join("vault-graph.yaml");
        std::fs::write(&cfg, "vault_path: notes\noutput: site/graph.json\n").unwrap();

        let args = Args::parse_from([
            "vault-graph",
            "--config",
            cfg.to_str().unwrap(),
            "-o",
            "flag.json",
        ]);
        let config = args.to_config().unwrap();
        assert_eq!(config.vault_path, PathBuf::from("notes"));
        assert_eq!(config.output, PathBuf::from("flag.json"));
    }
}
