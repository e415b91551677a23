//! Output formatting for findings and scan summaries.
//!
//! Detectors never print. Every finding flows through a [`Reporter`], which
//! writes either one text line or one JSON object per finding, in the order
//! the engine hands them over.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::analysis::registry;
use crate::config::OutputFormat;
use crate::types::{Family, FileReport, Finding, Idiom, ScanReport};

#[cfg(test)]
#[path = "reporting_test.rs"]
mod tests;

/// Writes findings to a sink in the configured format.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    color: bool,
}

impl<W: Write> Reporter<W> {
    #[must_use]
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format, color: true }
    }

    /// Disables ANSI styling regardless of terminal detection.
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }

    /// Writes every finding of one file.
    ///
    /// # Errors
    /// Returns error if the sink rejects the write or serialization fails.
    pub fn emit_file(&mut self, report: &FileReport) -> Result<()> {
        for finding in &report.findings {
            self.emit(finding)?;
        }
        Ok(())
    }

    /// Writes one finding.
    ///
    /// # Errors
    /// Returns error if the sink rejects the write or serialization fails.
    pub fn emit(&mut self, finding: &Finding) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let line = if self.color {
                    format_line_colored(finding)
                } else {
                    format_line(finding)
                };
                writeln!(self.out, "{line}")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, finding)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Flushes and returns the sink.
    ///
    /// # Errors
    /// Returns error if flushing fails.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// `path:line:col: idiom message`, without styling.
#[must_use]
pub fn format_line(finding: &Finding) -> String {
    format!(
        "{}: {} {}",
        finding.position,
        finding.idiom.label(),
        finding.message()
    )
}

fn format_line_colored(finding: &Finding) -> String {
    format!(
        "{}: {} {}",
        finding.position.to_string().bold(),
        paint(finding.idiom),
        finding.message()
    )
}

fn paint(idiom: Idiom) -> ColoredString {
    let label = idiom.label();
    match idiom.family() {
        Family::Channel => label.cyan(),
        Family::Lock => label.yellow(),
        Family::WaitGroup => label.green(),
        Family::Once => label.magenta(),
        Family::Cond => label.blue(),
    }
}

/// Writes per-idiom counts and run totals.
///
/// # Errors
/// Returns error if the sink rejects the write.
pub fn write_summary<W: Write>(out: &mut W, report: &ScanReport) -> Result<()> {
    #[allow(clippy::cast_possible_truncation)]
    let duration = Duration::from_millis(report.duration_ms as u64);

    let counts = report.counts_by_idiom();
    if !counts.is_empty() {
        writeln!(out, "{}", "Findings by idiom:".bold())?;
        for (idiom, count) in &counts {
            writeln!(out, "  {:<18} {count:>6}", idiom.label())?;
        }
    }

    let scanned = report.files.len();
    let status = if report.failed_files > 0 {
        "~".yellow().bold()
    } else {
        "OK".green().bold()
    };
    writeln!(
        out,
        "{status} {} {} in {} {} ({} failed) in {duration:?}.",
        report.total_findings,
        pluralize("finding", report.total_findings),
        scanned,
        pluralize("file", scanned),
        report.failed_files,
    )?;
    Ok(())
}

/// Writes the registered detector catalog, grouped by node kind.
///
/// # Errors
/// Returns error if the sink rejects the write.
pub fn write_catalog<W: Write>(out: &mut W) -> Result<()> {
    for detector in registry::all() {
        writeln!(
            out,
            "{:<18} {:<20} {}",
            detector.idiom().label(),
            format!("{:?}", detector.kind()),
            detector.describe()
        )?;
    }
    Ok(())
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
