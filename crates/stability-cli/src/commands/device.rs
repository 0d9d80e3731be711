//! Device state command implementation

use clap::Args;

use crate::api::{ReplyBody, StabilityClient};
use crate::commands::report_call;
use crate::config::ClientConfig;
use crate::{output, Result};

/// Field names the device snapshot exposes, for the prompt and help text.
pub const AVAILABLE_FIELDS: [&str; 16] = [
    "operationMode",
    "emergencyStop",
    "oilPumpStatus",
    "cylinderState",
    "platform1State",
    "platform2State",
    "heaterStatus",
    "coolingStatus",
    "leveling1Status",
    "leveling2Status",
    "cylinderPressure",
    "liftPressure",
    "platform1TiltAngle",
    "platform2TiltAngle",
    "platform1Position",
    "platform2Position",
];

#[derive(Debug, Clone, Args)]
pub struct DeviceArgs {
    /// Comma-separated field names to request (all fields when omitted)
    #[arg(short, long)]
    pub fields: Option<String>,

    /// Output format (json, table)
    #[arg(short = 'o', long, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!("Unknown format: {s}")),
        }
    }
}

pub async fn execute(args: DeviceArgs) -> Result<()> {
    let config = ClientConfig::load()?;
    let client = StabilityClient::new(&config)?;

    let label = match args.fields.as_deref() {
        Some(fields) => format!(
            "GET {}/stability/device/state?fields={fields}",
            config.base_url()
        ),
        None => format!("GET {}/stability/device/state", config.base_url()),
    };

    match args.format {
        OutputFormat::Json => {
            report_call(&label, client.device_state(args.fields.as_deref())).await?;
        }
        OutputFormat::Table => {
            output::info(&label);
            match client.device_state(args.fields.as_deref()).await {
                Ok(reply) => match &reply.body {
                    ReplyBody::Json(json) if reply.is_success() => output::device_table(json),
                    _ => output::reply(&reply),
                },
                Err(err) if err.is_connectivity() => {
                    output::error(&format!("request failed: {err}"));
                }
                Err(err) => return Err(err),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_available_fields_count() {
        assert_eq!(AVAILABLE_FIELDS.len(), 16);
    }
}
