//! File replay driver for the matching engine.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use exchange_replay::cli::Cli;
use exchange_replay::replay;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG overrides the CLI flag.
    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    replay::run(&cli)
}
