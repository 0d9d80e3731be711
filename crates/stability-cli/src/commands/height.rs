//! Platform height control command implementation

use clap::{Args, ValueEnum};

use crate::api::StabilityClient;
use crate::commands::report_call;
use crate::config::ClientConfig;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeightStateArg {
    Raise,
    Reset,
}

impl HeightStateArg {
    #[must_use]
    pub fn as_wire(&self) -> &'static str {
        match self {
            HeightStateArg::Raise => "raise",
            HeightStateArg::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct HeightArgs {
    /// Platform number (1 or 2)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub platform: u8,

    /// Height state to request
    #[arg(value_enum)]
    pub state: HeightStateArg,
}

pub async fn execute(args: HeightArgs) -> Result<()> {
    let config = ClientConfig::load()?;
    let client = StabilityClient::new(&config)?;

    let label = format!(
        "POST {}/stability/platformHeight/control platform={} state={}",
        config.base_url(),
        args.platform,
        args.state.as_wire()
    );
    report_call(
        &label,
        client.platform_height_control(args.platform, args.state.as_wire()),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(HeightStateArg::Raise.as_wire(), "raise");
        assert_eq!(HeightStateArg::Reset.as_wire(), "reset");
    }
}
