//! CLI structure and argument parsing

use crate::commands::Commands;
use clap::Parser;

/// Manual test client for the stability-control HTTP API
#[derive(Debug, Parser)]
#[command(name = "stability-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
