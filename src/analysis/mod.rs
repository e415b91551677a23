// src/analysis/mod.rs
//! Core analysis: node classification, detector registry and traversal.

pub mod detectors;
pub mod kind;
pub mod registry;
pub mod walk;
pub mod worker;

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use crate::config::Config;
use crate::types::{FileReport, ScanReport};

pub use detectors::{Detector, ScanContext};
pub use kind::NodeKind;
pub use worker::{scan_file, scan_source};

/// Runs the per-file pipeline over a list of files.
pub struct Engine {
    parallel: bool,
}

impl Engine {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { parallel: config.parallel }
    }

    #[must_use]
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    /// Scans `files` and returns reports in the order given.
    #[must_use]
    pub fn scan(&self, files: &[PathBuf]) -> ScanReport {
        let mut ignore = |_: &FileReport| Ok::<(), Infallible>(());
        match self.scan_streaming(files, &mut ignore) {
            Ok(report) => report,
            Err(never) => match never {},
        }
    }

    /// Scans `files`, handing each report to `on_file` in enumeration order.
    ///
    /// Sequential mode calls `on_file` as soon as each file is done. Parallel
    /// mode buffers per-file reports and flushes them in order once all files
    /// are scanned, so both modes produce the same sequence.
    ///
    /// # Errors
    /// Stops at and returns the first error from `on_file`.
    pub fn scan_streaming<F, E>(&self, files: &[PathBuf], on_file: &mut F) -> Result<ScanReport, E>
    where
        F: FnMut(&FileReport) -> Result<(), E>,
    {
        let start = Instant::now();

        let reports = if self.parallel {
            let reports: Vec<FileReport> = files.par_iter().map(|p| scan_file(p)).collect();
            for report in &reports {
                on_file(report)?;
            }
            reports
        } else {
            let mut reports = Vec::with_capacity(files.len());
            for path in files {
                let report = scan_file(path);
                on_file(&report)?;
                reports.push(report);
            }
            reports
        };

        Ok(ScanReport::from_files(reports, start.elapsed().as_millis()))
    }

    /// Scans a single file.
    #[must_use]
    pub fn scan_one(&self, path: &Path) -> ScanReport {
        self.scan(&[path.to_path_buf()])
    }
}
