//! Platform leveling control command implementation

use clap::{Args, ValueEnum};

use crate::api::StabilityClient;
use crate::commands::report_call;
use crate::config::ClientConfig;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelStateArg {
    Level,
    LevelReset,
}

impl LevelStateArg {
    #[must_use]
    pub fn as_wire(&self) -> &'static str {
        match self {
            LevelStateArg::Level => "level",
            LevelStateArg::LevelReset => "level-reset",
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct LevelArgs {
    /// Platform number (1 or 2)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub platform: u8,

    /// Leveling state to request
    #[arg(value_enum)]
    pub state: LevelStateArg,
}

pub async fn execute(args: LevelArgs) -> Result<()> {
    let config = ClientConfig::load()?;
    let client = StabilityClient::new(&config)?;

    let label = format!(
        "POST {}/stability/platformHorizontal/control platform={} state={}",
        config.base_url(),
        args.platform,
        args.state.as_wire()
    );
    report_call(
        &label,
        client.platform_horizontal_control(args.platform, args.state.as_wire()),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(LevelStateArg::Level.as_wire(), "level");
        assert_eq!(LevelStateArg::LevelReset.as_wire(), "level-reset");
    }
}
