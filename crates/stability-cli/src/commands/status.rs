//! System status command implementation

use clap::Args;

use crate::api::StabilityClient;
use crate::commands::report_call;
use crate::config::ClientConfig;
use crate::Result;

#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Probe the callback peer's /health endpoint instead
    #[arg(long)]
    pub callback: bool,
}

pub async fn execute(args: StatusArgs) -> Result<()> {
    let config = ClientConfig::load()?;
    let client = StabilityClient::new(&config)?;

    if args.callback {
        let label = format!("GET {}/health", config.callback_url());
        report_call(&label, client.callback_health()).await?;
    } else {
        let label = format!("GET {}/stability/system/status", config.base_url());
        report_call(&label, client.system_status()).await?;
    }

    Ok(())
}
