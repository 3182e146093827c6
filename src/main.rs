//! UniHash CLI - universal hash sample tooling
//!
//! Generates random samples, evaluates supplied records, or verifies
//! claimed outputs, depending on the selected mode.

use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;
use unihash::config::{CliArgs, RunConfig};
use unihash::core::Runner;
use unihash::error::Result;

fn main() {
    // Parse CLI arguments (clap exits with status 2 on its own errors)
    let args = CliArgs::parse();

    // Initialize logging; stdout carries records, so log to stderr
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    // Handle result
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &CliArgs) -> Result<()> {
    // Validate before touching any stream
    let config = RunConfig::from_cli(args)?;
    tracing::debug!(?config, "Configuration");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Runner::new(config).execute(stdin.lock(), stdout.lock())?;

    Ok(())
}

fn env_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}
