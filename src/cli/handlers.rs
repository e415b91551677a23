// src/cli/handlers.rs
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::analysis::Engine;
use crate::cli::args::Cli;
use crate::config::{Config, OutputFormat};
use crate::discovery::{self, Target};
use crate::reporting::{self, Reporter};
use crate::types::ScanReport;

/// Message printed when no path operand is given.
pub const USAGE_HINT: &str = "No file or directory given. Usage: syncscout [OPTIONS] <PATH>";

/// Resolves the runtime config: defaults, then the config file, then flags.
///
/// # Errors
/// Returns error if the config file or an exclude pattern is invalid.
pub fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.add_excludes(&cli.exclude)?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.parallel |= cli.parallel;
    config.summary &= !cli.no_summary;
    Ok(config)
}

/// Prints the detector catalog.
///
/// # Errors
/// Returns error if stdout cannot be written.
pub fn handle_catalog<W: Write>(out: &mut W) -> Result<()> {
    reporting::write_catalog(out)
}

/// Scans a file or directory operand, streaming findings to `out` and the
/// summary to `diag`.
///
/// Returns `None` when nothing was scanned (no operand, missing path).
/// Per-file failures are logged and counted, never returned.
///
/// # Errors
/// Returns error only if writing to `out` or `diag` fails.
pub fn handle_scan<W: Write, D: Write>(
    path: Option<&Path>,
    config: &Config,
    out: W,
    diag: &mut D,
) -> Result<Option<ScanReport>> {
    let Some(path) = path else {
        writeln!(diag, "{USAGE_HINT}")?;
        return Ok(None);
    };

    let mut reporter = Reporter::new(out, config.format);
    let engine = Engine::new(config);

    let report = match Target::resolve(path) {
        Target::File(file) => {
            engine.scan_streaming(&[file], &mut |r| reporter.emit_file(r))?
        }
        Target::Directory(dir) => {
            info!("Processing all go files in directory {}", dir.display());
            let found = discovery::discover(&dir, config);
            let report = engine.scan_streaming(&found.files, &mut |r| reporter.emit_file(r))?;
            if config.summary && config.format == OutputFormat::Text {
                reporting::write_summary(diag, &report)?;
            }
            report
        }
        Target::Missing(missing) => {
            error!("Could not access {}: no such file or directory", missing.display());
            return Ok(None);
        }
    };

    reporter.finish().context("Failed to flush output")?;
    Ok(Some(report))
}
