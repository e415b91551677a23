// src/discovery.rs
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::ScanError;
use crate::lang;

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;

/// What a path operand turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
    Missing(PathBuf),
}

impl Target {
    #[must_use]
    pub fn resolve(path: &Path) -> Self {
        if path.is_dir() {
            Self::Directory(path.to_path_buf())
        } else if path.exists() {
            Self::File(path.to_path_buf())
        } else {
            Self::Missing(path.to_path_buf())
        }
    }
}

/// Files found under a directory, plus the walk errors that were skipped.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub errors: Vec<ScanError>,
}

/// Recursively lists every file under `root` with a configured extension,
/// sorted by name at each level so the order is stable across runs.
///
/// Pruned directories are never descended into. Entries the walker cannot
/// access are logged and skipped; their siblings are still listed.
#[must_use]
pub fn discover(root: &Path, config: &Config) -> Discovery {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_pruned_dir(e, config));

    let mut found = Discovery::default();
    for item in walker {
        match item {
            Ok(entry) => {
                if is_file_entry(&entry) && is_candidate(entry.path(), config) {
                    found.files.push(entry.into_path());
                }
            }
            Err(e) => {
                let err = ScanError::from(e);
                warn!("{err}");
                found.errors.push(err);
            }
        }
    }

    if !found.errors.is_empty() {
        warn!("Encountered {} errors during file walk", found.errors.len());
    }
    debug!("Discovered {} files under {}", found.files.len(), root.display());
    found
}

/// Regular files, and symlinks that resolve to one. Linked directories are
/// never followed, so the walk cannot cycle.
fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_pruned_dir(entry: &walkdir::DirEntry, config: &Config) -> bool {
    entry.file_type().is_dir() && config.is_pruned(&entry.file_name().to_string_lossy())
}

fn is_candidate(path: &Path, config: &Config) -> bool {
    lang::has_extension(path, &config.extensions) && !config.is_excluded(path)
}
