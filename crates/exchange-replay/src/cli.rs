//! Command-line interface for the replay driver.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name = "exchange-replay")]
#[clap(about = "Replay an order event stream through the matching engine")]
pub struct Cli {
    /// Input event file
    #[clap(default_value = "input.txt")]
    pub input: PathBuf,

    /// Output record file
    #[clap(default_value = "output.txt")]
    pub output: PathBuf,

    /// Enable debug logging
    #[clap(short, long)]
    pub debug: bool,
}
