//! Command implementations

pub mod device;
pub mod height;
pub mod level;
pub mod settings;
pub mod status;
pub mod suite;
pub mod support;

use std::future::Future;

use clap::Subcommand;

use crate::api::ApiReply;
use crate::{output, Result};

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Query the system status endpoint
    Status(status::StatusArgs),

    /// Query the device state endpoint
    Device(device::DeviceArgs),

    /// Send a support control command
    Support(support::SupportArgs),

    /// Send a platform height control command
    Height(height::HeightArgs),

    /// Send a platform leveling control command
    Level(level::LevelArgs),

    /// Exercise every endpoint in a fixed order
    Suite(suite::SuiteArgs),

    /// Show or update connection settings
    Settings(settings::SettingsArgs),

    /// Enter the interactive menu
    Shell,
}

impl Commands {
    pub async fn execute(self) -> Result<()> {
        match self {
            Commands::Status(args) => status::execute(args).await,
            Commands::Device(args) => device::execute(args).await,
            Commands::Support(args) => support::execute(args).await,
            Commands::Height(args) => height::execute(args).await,
            Commands::Level(args) => level::execute(args).await,
            Commands::Suite(args) => suite::execute(args).await,
            Commands::Settings(args) => settings::execute(args).await,
            Commands::Shell => Box::pin(crate::shell::run_shell()).await,
        }
    }
}

/// Issue one API call, print its outcome, and swallow connectivity failures.
///
/// Connection refused and timeouts are terminal for the single call only;
/// the caller keeps going.
pub(crate) async fn report_call(
    label: &str,
    call: impl Future<Output = Result<ApiReply>>,
) -> Result<Option<ApiReply>> {
    output::info(label);

    match call.await {
        Ok(reply) => {
            output::reply(&reply);
            Ok(Some(reply))
        }
        Err(err) if err.is_connectivity() => {
            output::error(&format!("request failed: {err}"));
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_status_command() {
        let cli = TestCli::parse_from(["test", "status"]);
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_parse_device_command() {
        let cli = TestCli::parse_from(["test", "device", "--fields", "operationMode"]);
        assert!(matches!(cli.command, Commands::Device(_)));
    }

    #[test]
    fn test_parse_support_command() {
        let cli = TestCli::parse_from(["test", "support", "rigid-support"]);
        assert!(matches!(cli.command, Commands::Support(_)));
    }

    #[test]
    fn test_parse_height_command() {
        let cli = TestCli::parse_from(["test", "height", "1", "raise"]);
        assert!(matches!(cli.command, Commands::Height(_)));
    }

    #[test]
    fn test_parse_level_command() {
        let cli = TestCli::parse_from(["test", "level", "2", "level-reset"]);
        assert!(matches!(cli.command, Commands::Level(_)));
    }

    #[test]
    fn test_parse_suite_command() {
        let cli = TestCli::parse_from(["test", "suite"]);
        assert!(matches!(cli.command, Commands::Suite(_)));
    }

    #[test]
    fn test_parse_shell_command() {
        let cli = TestCli::parse_from(["test", "shell"]);
        assert!(matches!(cli.command, Commands::Shell));
    }

    #[test]
    fn test_height_rejects_platform_three() {
        let result = TestCli::try_parse_from(["test", "height", "3", "raise"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_support_rejects_unknown_state() {
        let result = TestCli::try_parse_from(["test", "support", "rigid"]);
        assert!(result.is_err());
    }
}
