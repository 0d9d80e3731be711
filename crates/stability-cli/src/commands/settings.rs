//! Connection settings command implementation

use clap::Args;

use crate::config::ClientConfig;
use crate::{output, Result};

#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    /// Server host
    #[arg(long)]
    pub host: Option<String>,

    /// Server port
    #[arg(long)]
    pub port: Option<u16>,

    /// Callback peer port
    #[arg(long)]
    pub callback_port: Option<u16>,

    /// Default task id for control requests
    #[arg(long)]
    pub task_id: Option<i64>,

    /// Default defect id for control requests
    #[arg(long)]
    pub defect_id: Option<i64>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl SettingsArgs {
    fn is_empty(&self) -> bool {
        self.host.is_none()
            && self.port.is_none()
            && self.callback_port.is_none()
            && self.task_id.is_none()
            && self.defect_id.is_none()
            && self.timeout.is_none()
    }

    /// Apply the provided overrides to a config.
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(host) = &self.host {
            config.server_host = host.clone();
        }
        if let Some(port) = self.port {
            config.server_port = port;
        }
        if let Some(port) = self.callback_port {
            config.callback_port = port;
        }
        if let Some(task_id) = self.task_id {
            config.task_id = task_id;
        }
        if let Some(defect_id) = self.defect_id {
            config.defect_id = defect_id;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
    }
}

pub fn show(config: &ClientConfig) {
    output::header("Connection settings");
    output::kv("server host", &config.server_host);
    output::kv("server port", &config.server_port.to_string());
    output::kv("callback port", &config.callback_port.to_string());
    output::kv("task id", &config.task_id.to_string());
    output::kv("defect id", &config.defect_id.to_string());
    output::kv("timeout (s)", &config.timeout_secs.to_string());
}

pub async fn execute(args: SettingsArgs) -> Result<()> {
    let mut config = ClientConfig::load()?;

    if args.is_empty() {
        show(&config);
        return Ok(());
    }

    args.apply(&mut config);
    config.save()?;
    output::success("settings saved");
    show(&config);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let mut config = ClientConfig::default();
        let args = SettingsArgs {
            host: Some("10.1.2.3".to_string()),
            port: Some(9000),
            callback_port: None,
            task_id: Some(42),
            defect_id: None,
            timeout: None,
        };

        args.apply(&mut config);
        assert_eq!(config.server_host, "10.1.2.3");
        assert_eq!(config.server_port, 9000);
        assert_eq!(config.task_id, 42);
        // Untouched values keep their defaults.
        assert_eq!(config.defect_id, 91);
    }

    #[test]
    fn test_is_empty() {
        let args = SettingsArgs {
            host: None,
            port: None,
            callback_port: None,
            task_id: None,
            defect_id: None,
            timeout: None,
        };
        assert!(args.is_empty());
    }
}
