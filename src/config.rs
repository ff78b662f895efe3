use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VaultGraphError};

pub const DEFAULT_VAULT_PATH: &str = "test_vault";
pub const DEFAULT_OUTPUT: &str = "graph.json";

/// Settings for one graph build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub vault_path: PathBuf,
    pub output: PathBuf,
    /// Skip echoing titles and JSON to stdout.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vault_path: PathBuf::from(DEFAULT_VAULT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT),
            quiet: false,
        }
    }
}

/// Optional YAML config file, e.g.
///
/// ```yaml
/// vault_path: ~/notes
/// output: build/graph.json
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub vault_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| VaultGraphError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &raw)
    }

    fn parse(path: &Path, raw: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping.
        if raw.trim().is_empty() {
            return Ok(FileConfig::default());
        }
        serde_yaml::from_str(raw).map_err(|source| VaultGraphError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Layer command-line values over the config file over the defaults.
    pub fn resolve(
        file: Option<FileConfig>,
        vault_path: Option<PathBuf>,
        output: Option<PathBuf>,
        quiet: bool,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Config::default();
        Config {
            vault_path: vault_path.or(file.vault_path).unwrap_or(defaults.vault_path),
            output: output.or(file.output).unwrap_or(defaults.output),
            quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = Config::resolve(None, None, None, false);
        assert_eq!(config.vault_path, PathBuf::from("test_vault"));
        assert_eq!(config.output, PathBuf::from("graph.json"));
        assert!(!config.quiet);
    }

    #[test]
    fn flags_override_file_which_overrides_defaults() {
        let file = FileConfig {
            vault_path: Some(PathBuf::from("from-file")),
            output: Some(PathBuf::from("file.json")),
        };
        let config = Config::resolve(Some(file), Some(PathBuf::from("from-flag")), None, true);
        assert_eq!(config.vault_path, PathBuf::from("from-flag"));
        assert_eq!(config.output, PathBuf::from("file.json"));
        assert!(config.quiet);
    }

    #[test]
    fn parses_yaml_file() {
        let file = FileConfig::parse(Path::new("cfg.yaml"), "vault_path: notes\n").unwrap();
        assert_eq!(file.vault_path, Some(PathBuf::from("notes")));
        assert_eq!(file.output, None);
    }

    #[test]
    fn empty_file_is_default() {
        let file = FileConfig::parse(Path::new("cfg.yaml"), "\n").unwrap();
        assert_eq!(file, FileConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FileConfig::parse(Path::new("cfg.yaml"), "vault: notes\n").unwrap_err();
        assert!(matches!(err, VaultGraphError::Config { .. }));
    }

    #[test]
    fn missing_file_is_a_config_read_error() {
        let err = FileConfig::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, VaultGraphError::ConfigRead { .. }));
    }
}
