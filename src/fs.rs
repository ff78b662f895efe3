use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, VaultGraphError};

const MARKDOWN_SUFFIX: &str = ".md";

/// Markdown files found under a vault root. `paths[i]` and `titles[i]`
/// describe the same file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultScan {
    pub paths: Vec<PathBuf>,
    pub titles: Vec<String>,
}

impl VaultScan {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.paths
            .iter()
            .map(PathBuf::as_path)
            .zip(self.titles.iter().map(String::as_str))
    }
}

/// Walk `vault_path` recursively and collect every `*.md` file in walk order.
///
/// Within each folder, files are visited before any subfolder is entered;
/// otherwise the directory's own listing order is kept.
/// A missing or unreadable root yields an empty scan.
pub fn scan_vault(vault_path: &Path) -> VaultScan {
    let mut scan = VaultScan::default();

    let walker = WalkDir::new(vault_path)
        .min_depth(1)
        .sort_by(|a, b| is_folder(a).cmp(&is_folder(b)));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable vault entry: {e}");
                continue;
            }
        };
        if is_folder(&entry) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if let Some(title) = markdown_title(&file_name) {
            scan.paths.push(entry.path().to_path_buf());
            scan.titles.push(title.to_string());
        }
    }

    scan
}

/// Directories and symlinks to directories. Linked folders are not descended into.
fn is_folder(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Title of a Markdown file name, or `None` when the name lacks the `.md` suffix.
fn markdown_title(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(MARKDOWN_SUFFIX)?;
    // A bare ".md" is a hidden file name, not an extension.
    if stem.is_empty() {
        Some(file_name)
    } else {
        Some(stem)
    }
}

/// Read a whole document, normalizing `\r\n` and `\r` line endings to `\n`.
pub fn read_document(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|source| VaultGraphError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.contains('\r') {
        Ok(contents.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Ok(contents)
    }
}

pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| VaultGraphError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    debug!("Writing graph: {}", path.display());
    fs::write(path, contents).map_err(|source| VaultGraphError::Write {
        path: path.to_path_buf(),
        source,
    })
}
