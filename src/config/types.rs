use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How findings are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `path:line:col: idiom message` line per finding.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSection {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_prune_dirs")]
    pub prune_dirs: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            prune_dirs: default_prune_dirs(),
            exclude: Vec::new(),
            parallel: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub summary: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { format: OutputFormat::Text, summary: true }
    }
}

fn default_extensions() -> Vec<String> { vec![crate::lang::GO_EXT.to_string()] }
fn default_prune_dirs() -> Vec<String> { vec![".git".to_string()] }
const fn default_true() -> bool { true }

/// On-disk layout of `syncscout.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SyncScoutToml {
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub extensions: Vec<String>,
    pub prune_dirs: Vec<String>,
    pub exclude_patterns: Vec<regex::Regex>,
    pub parallel: bool,
    pub format: OutputFormat,
    pub summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            prune_dirs: default_prune_dirs(),
            exclude_patterns: Vec::new(),
            parallel: false,
            format: OutputFormat::Text,
            summary: true,
        }
    }
}
