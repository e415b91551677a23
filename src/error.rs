// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{path}:{line}:{column}: parse error: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Could not load the Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Could not access {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ScanError>;

// Gracefully convert WalkDir errors, keeping the path that failed.
impl From<walkdir::Error> for ScanError {
    fn from(e: walkdir::Error) -> Self {
        ScanError::Walk {
            path: e.path().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("<unknown>")),
            message: e.to_string(),
        }
    }
}
