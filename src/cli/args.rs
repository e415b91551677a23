use clap::Parser;
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "syncscout",
    version,
    about = "Find channel and sync-package idioms in Go source"
)]
pub struct Cli {
    /// Go file or directory to scan
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Scan files in parallel; output order is unchanged
    #[arg(long)]
    pub parallel: bool,

    /// Config file (default: ./syncscout.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip paths matching this regex (repeatable)
    #[arg(long, value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Do not print the summary after a directory scan
    #[arg(long)]
    pub no_summary: bool,

    /// List the idiom catalog and exit
    #[arg(long)]
    pub list_idioms: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
