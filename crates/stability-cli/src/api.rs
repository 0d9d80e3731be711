//! HTTP client wrapper for the stability server.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::Result;

/// Outcome of a single API call: the raw status code plus the decoded body.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: u16,
    pub body: ReplyBody,
}

/// Response body, decoded as JSON when possible.
#[derive(Debug, Clone)]
pub enum ReplyBody {
    Json(Value),
    Text(String),
}

impl ApiReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    async fn from_response(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => ReplyBody::Json(json),
            Err(_) => ReplyBody::Text(text),
        };

        Ok(Self { status, body })
    }
}

/// Client for the stability-control API.
#[derive(Clone)]
pub struct StabilityClient {
    client: Client,
    base_url: String,
    callback_url: String,
    task_id: i64,
    defect_id: i64,
}

impl StabilityClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            callback_url: config.callback_url(),
            task_id: config.task_id,
            defect_id: config.defect_id,
        })
    }

    /// `GET /stability/system/status`.
    pub async fn system_status(&self) -> Result<ApiReply> {
        let url = format!("{}/stability/system/status", self.base_url);
        let response = self.client.get(&url).send().await?;
        ApiReply::from_response(response).await
    }

    /// `GET /stability/device/state`, optionally filtered.
    pub async fn device_state(&self, fields: Option<&str>) -> Result<ApiReply> {
        let mut url = format!("{}/stability/device/state", self.base_url);
        if let Some(fields) = fields {
            url.push_str(&format!("?fields={fields}"));
        }

        let response = self.client.get(&url).send().await?;
        ApiReply::from_response(response).await
    }

    /// `POST /stability/support/control`.
    pub async fn support_control(&self, state: &str) -> Result<ApiReply> {
        let url = format!("{}/stability/support/control", self.base_url);
        let payload = serde_json::json!({
            "taskId": self.task_id,
            "defectId": self.defect_id,
            "state": state,
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        ApiReply::from_response(response).await
    }

    /// `POST /stability/platformHeight/control`.
    pub async fn platform_height_control(&self, platform: u8, state: &str) -> Result<ApiReply> {
        let url = format!("{}/stability/platformHeight/control", self.base_url);
        let payload = serde_json::json!({
            "taskId": self.task_id,
            "defectId": self.defect_id,
            "platformNum": platform,
            "state": state,
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        ApiReply::from_response(response).await
    }

    /// `POST /stability/platformHorizontal/control`.
    pub async fn platform_horizontal_control(
        &self,
        platform: u8,
        state: &str,
    ) -> Result<ApiReply> {
        let url = format!("{}/stability/platformHorizontal/control", self.base_url);
        let payload = serde_json::json!({
            "taskId": self.task_id,
            "defectId": self.defect_id,
            "platformNum": platform,
            "state": state,
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        ApiReply::from_response(response).await
    }

    /// `GET /health` on the callback peer.
    pub async fn callback_health(&self) -> Result<ApiReply> {
        let url = format!("{}/health", self.callback_url);
        let response = self.client.get(&url).send().await?;
        ApiReply::from_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ClientConfig::default();
        let client = StabilityClient::new(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_urls_from_config() {
        let mut config = ClientConfig::default();
        config.server_host = "10.0.0.9".to_string();
        config.server_port = 9000;
        config.callback_port = 9001;

        let client = StabilityClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://10.0.0.9:9000");
        assert_eq!(client.callback_url, "http://10.0.0.9:9001");
    }

    #[test]
    fn test_reply_success_range() {
        let reply = ApiReply {
            status: 200,
            body: ReplyBody::Text(String::new()),
        };
        assert!(reply.is_success());

        let reply = ApiReply {
            status: 400,
            body: ReplyBody::Text(String::new()),
        };
        assert!(!reply.is_success());
    }
}
