//! Worker module for file parsing and analysis.

use std::path::Path;

use tracing::{debug, error, info};

use crate::error::{Result, ScanError};
use crate::lang;
use crate::types::{FileReport, Finding};

use super::detectors::ScanContext;
use super::walk;

/// Parses `source` and walks it, returning findings in traversal order.
///
/// # Errors
/// Returns `ScanError::Parse` or `ScanError::Language` if no valid tree can
/// be built.
pub fn scan_source(path: &Path, source: &str) -> Result<Vec<Finding>> {
    let tree = lang::parse(path, source)?;
    let ctx = ScanContext::new(path, source);
    Ok(walk::walk(tree.root_node(), &ctx))
}

/// Reads, parses and walks one file. Failures are logged and recorded on
/// the report; they never abort the caller.
#[must_use]
pub fn scan_file(path: &Path) -> FileReport {
    info!("Processing file {}", path.display());

    match read_and_scan(path) {
        Ok(findings) => {
            debug!("{}: {} findings", path.display(), findings.len());
            FileReport::ok(path, findings)
        }
        Err(e) => {
            error!("Could not process file {}: {e}", path.display());
            FileReport::failed(path, e.to_string())
        }
    }
}

fn read_and_scan(path: &Path) -> Result<Vec<Finding>> {
    let source = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    scan_source(path, &source)
}
