//! Connection settings for the test client.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Result;

/// Client configuration, persisted as TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Host the stability server listens on.
    pub server_host: String,

    /// Port of the stability server.
    pub server_port: u16,

    /// Port of the callback peer's liveness endpoint. The mock hosts it
    /// itself, so this defaults to the server port.
    pub callback_port: u16,

    /// Default task id sent with control requests.
    pub task_id: i64,

    /// Default defect id sent with control requests.
    pub defect_id: i64,

    /// Per-call request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(config_path)?;
                return Ok(toml::from_str(&content)?);
            }
        }

        Ok(Self::default())
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stability").join("config.toml"))
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }

    /// Base URL of the stability server.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }

    /// Base URL of the callback peer.
    #[must_use]
    pub fn callback_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.callback_port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            callback_port: 8080,
            task_id: 125,
            defect_id: 91,
            timeout_secs: 5,
        }
    }
}
