// src/config/io.rs
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::error::{Result, ScanError};

use super::types::{Config, SyncScoutToml};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "syncscout.toml";

/// Reads the config file.
///
/// An explicit path must exist; the default file is optional.
///
/// # Errors
/// Returns `ScanError::Config` if the file cannot be read or parsed.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<Option<SyncScoutToml>> {
    let path = explicit.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound && explicit.is_none() => {
            debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
            return Ok(None);
        }
        Err(e) => {
            return Err(ScanError::Config { path, message: e.to_string() });
        }
    };

    debug!("Loading config from {}", path.display());
    parse_toml(&path, &content).map(Some)
}

/// Parses `syncscout.toml` content.
///
/// # Errors
/// Returns `ScanError::Config` on malformed TOML or unknown keys.
pub fn parse_toml(path: &Path, content: &str) -> Result<SyncScoutToml> {
    toml::from_str(content).map_err(|e| ScanError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Applies file settings on top of `config`.
///
/// # Errors
/// Returns `ScanError::Config` if an exclude pattern is not a valid regex.
pub fn apply_toml(config: &mut Config, file: &SyncScoutToml, origin: &Path) -> Result<()> {
    config.extensions.clone_from(&file.scan.extensions);
    config.prune_dirs.clone_from(&file.scan.prune_dirs);
    config.parallel = file.scan.parallel;
    config.format = file.output.format;
    config.summary = file.output.summary;

    for pattern in &file.scan.exclude {
        config.exclude_patterns.push(compile_pattern(pattern, origin)?);
    }
    Ok(())
}

/// Compiles one exclude pattern, attributing failures to `origin`.
///
/// # Errors
/// Returns `ScanError::Config` if the pattern is not a valid regex.
pub fn compile_pattern(pattern: &str, origin: &Path) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ScanError::Config {
        path: origin.to_path_buf(),
        message: format!("bad exclude pattern '{pattern}': {e}"),
    })
}
