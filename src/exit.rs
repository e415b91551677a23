// src/exit.rs
//! Standardized process exit codes for `syncscout`.
//!
//! A started scan always succeeds: per-file failures are logged, not
//! surfaced. Only invocation failures map to a non-zero code.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SyncScoutExit {
    /// Scan ran to completion (possibly with logged per-file failures).
    Success = 0,
    /// Invocation failed (config, output sink).
    Error = 1,
    /// Arguments were rejected by the parser.
    InvalidInput = 2,
}

impl SyncScoutExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for SyncScoutExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<()>> for SyncScoutExit {
    fn from(res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => {
                tracing::error!("{e:#}");
                Self::Error
            }
        }
    }
}
