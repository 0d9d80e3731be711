//! Liveness and system status handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::state::AppState;

/// Liveness payload served to callback peers.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().timestamp_millis(),
    })
}

/// Status snapshot served at `/stability/system/status`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub msg: &'static str,
    pub code: u16,
    pub status: &'static str,
    pub version: &'static str,
    pub platform: &'static str,
    pub uptime_secs: u64,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/stability/system/status",
    responses(
        (status = 200, description = "System status snapshot", body = SystemStatus)
    )
)]
pub async fn system_status(State(state): State<Arc<AppState>>) -> Json<SystemStatus> {
    Json(SystemStatus {
        msg: "success",
        code: 200,
        status: "online",
        version: env!("CARGO_PKG_VERSION"),
        platform: "rust-axum",
        uptime_secs: state.uptime_secs(),
        timestamp: Utc::now().timestamp_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "online",
            version: "0.1.0",
            timestamp: 1700000000000,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "online");
        assert_eq!(json["timestamp"], 1700000000000i64);
    }

    #[test]
    fn test_system_status_uses_camel_case() {
        let status = SystemStatus {
            msg: "success",
            code: 200,
            status: "online",
            version: "0.1.0",
            platform: "rust-axum",
            uptime_secs: 12,
            timestamp: 0,
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["uptimeSecs"], 12);
        assert_eq!(json["code"], 200);
    }
}
