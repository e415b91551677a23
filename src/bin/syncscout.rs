// src/bin/syncscout.rs
use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use syncscout_core::cli::{self, Cli};
use syncscout_core::exit::SyncScoutExit;

/// Environment variable holding a tracing filter, e.g. `SYNCSCOUT_LOG=debug`.
const LOG_ENV: &str = "SYNCSCOUT_LOG";

fn main() -> SyncScoutExit {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                SyncScoutExit::InvalidInput
            } else {
                SyncScoutExit::Success
            };
        }
    };

    init_tracing(cli.verbose);
    run(&cli).into()
}

fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("syncscout=debug,syncscout_core=debug")
        } else {
            EnvFilter::new("syncscout=info,syncscout_core=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    debug!("Logging initialized (verbose={verbose})");
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list_idioms {
        return cli::handle_catalog(&mut io::stdout().lock());
    }

    let config = cli::build_config(cli)?;
    debug!("Config resolved: {config:?}");

    let stdout = io::stdout().lock();
    // Left unlocked: worker threads log to stderr while the scan runs.
    let mut stderr = io::stderr();
    cli::handle_scan(cli.path.as_deref(), &config, stdout, &mut stderr)?;
    Ok(())
}
