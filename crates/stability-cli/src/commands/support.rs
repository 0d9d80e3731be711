//! Support control command implementation

use clap::{Args, ValueEnum};

use crate::api::StabilityClient;
use crate::commands::report_call;
use crate::config::ClientConfig;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SupportStateArg {
    RigidSupport,
    FlexibleReset,
}

impl SupportStateArg {
    #[must_use]
    pub fn as_wire(&self) -> &'static str {
        match self {
            SupportStateArg::RigidSupport => "rigid-support",
            SupportStateArg::FlexibleReset => "flexible-reset",
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SupportArgs {
    /// Support state to request
    #[arg(value_enum)]
    pub state: SupportStateArg,
}

pub async fn execute(args: SupportArgs) -> Result<()> {
    let config = ClientConfig::load()?;
    let client = StabilityClient::new(&config)?;

    let label = format!(
        "POST {}/stability/support/control state={}",
        config.base_url(),
        args.state.as_wire()
    );
    report_call(&label, client.support_control(args.state.as_wire())).await?;

    Ok(())
}
