// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::DEFAULT_CONFIG_FILE;
pub use self::types::{Config, OutputFormat, OutputSection, ScanSection, SyncScoutToml};

use std::path::Path;

use crate::error::Result;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config from defaults and the optional `syncscout.toml`.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable or invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::new();
        if let Some(file) = io::load_toml_config(explicit)? {
            let origin = explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
            io::apply_toml(&mut config, &file, origin)?;
        }
        Ok(config)
    }

    /// Adds exclude patterns given on the command line.
    ///
    /// # Errors
    /// Returns error if a pattern is not a valid regex.
    pub fn add_excludes(&mut self, patterns: &[String]) -> Result<()> {
        for pattern in patterns {
            self.exclude_patterns
                .push(io::compile_pattern(pattern, Path::new("--exclude"))?);
        }
        Ok(())
    }

    /// Returns true if the forward-slash form of `path` matches an exclude pattern.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude_patterns.is_empty() {
            return false;
        }
        let normalized = path.to_string_lossy().replace('\\', "/");
        self.exclude_patterns.iter().any(|re| re.is_match(&normalized))
    }

    #[must_use]
    pub fn is_pruned(&self, dir_name: &str) -> bool {
        self.prune_dirs.iter().any(|d| d == dir_name)
    }
}
