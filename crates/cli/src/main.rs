//! sonar-report CLI - consolidated code-quality report

use anyhow::Result;
use clap::Parser;
use sonar_report_cli::{commands, Cli};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    commands::generate::run(&cli)?;

    Ok(())
}
