//! stability-cli - manual test console for the stability-control API

use clap::Parser;
use stability_cli::{Cli, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(cmd) => cmd.execute().await,
        None => {
            // No command specified, start the interactive menu
            stability_cli::shell::run_shell().await
        }
    }
}
