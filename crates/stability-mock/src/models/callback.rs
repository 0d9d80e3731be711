//! Callback receiver payloads.
//!
//! Callbacks are fire-and-forget: no correlation with an outstanding control
//! request is tracked. The receiver echoes the identifying fields it was
//! given, absent fields included (they echo as null).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload of `POST /business/task/stability/support/cback`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupportCallback {
    pub task_id: Option<i64>,
    pub defect_id: Option<i64>,
    pub state: Option<String>,
}

/// Payload of the two platform callback endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCallback {
    pub task_id: Option<i64>,
    pub defect_id: Option<i64>,
    pub platform_num: Option<i64>,
    pub state: Option<String>,
}

/// Echo of the received identifying fields plus a server-generated timestamp.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallbackEcho {
    pub task_id: Option<i64>,
    pub defect_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub platform_num: Option<Option<i64>>,
    pub state: Option<String>,
    pub timestamp: String,
}

impl CallbackEcho {
    #[must_use]
    pub fn from_support(cb: SupportCallback) -> Self {
        Self {
            task_id: cb.task_id,
            defect_id: cb.defect_id,
            platform_num: None,
            state: cb.state,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    #[must_use]
    pub fn from_platform(cb: PlatformCallback) -> Self {
        Self {
            task_id: cb.task_id,
            defect_id: cb.defect_id,
            platform_num: Some(cb.platform_num),
            state: cb.state,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Acknowledgment wrapper around the echo.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CallbackReply {
    pub code: u16,
    pub msg: String,
    pub data: CallbackEcho,
}

impl CallbackReply {
    #[must_use]
    pub fn new(msg: impl Into<String>, data: CallbackEcho) -> Self {
        Self {
            code: 200,
            msg: msg.into(),
            data,
        }
    }
}
