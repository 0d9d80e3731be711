//! Device state query handler.

use axum::extract::Query;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::models::DeviceState;

#[derive(Debug, Deserialize)]
pub struct DeviceStateQuery {
    pub fields: Option<String>,
}

/// `GET /stability/device/state`.
///
/// Without `fields`, the full snapshot is returned. With `fields`, only the
/// named fields that exist in the snapshot are included; unknown names are
/// dropped silently. The `fields` string itself is never rejected; this
/// endpoint has no failure path.
pub async fn device_state(Query(query): Query<DeviceStateQuery>) -> Json<Value> {
    let snapshot = DeviceState::snapshot();

    let fields = match query.fields.as_deref() {
        Some(fields) if !fields.is_empty() => {
            info!(fields, "device state requested");
            snapshot.select_fields(fields)
        }
        _ => {
            info!("full device state requested");
            snapshot.field_map()
        }
    };

    let mut body = Map::new();
    body.insert("msg".to_string(), Value::from("success"));
    body.insert("code".to_string(), Value::from(200));
    body.insert(
        "timestamp".to_string(),
        Value::from(Utc::now().timestamp_millis()),
    );
    body.extend(fields);

    Json(Value::Object(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_full_state_has_envelope_and_all_fields() {
        let Json(body) = device_state(Query(DeviceStateQuery { fields: None })).await;
        let obj = body.as_object().unwrap();

        // msg + code + timestamp + 16 snapshot fields
        assert_eq!(obj.len(), 19);
        assert_eq!(obj["msg"], "success");
        assert_eq!(obj["code"], 200);
        assert!(obj["timestamp"].is_i64());
    }

    #[tokio::test]
    async fn test_filtered_state_returns_exact_set() {
        let query = DeviceStateQuery {
            fields: Some("operationMode,emergencyStop".to_string()),
        };
        let Json(body) = device_state(Query(query)).await;
        let obj = body.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert_eq!(obj["operationMode"], "manual");
        assert_eq!(obj["emergencyStop"], "normal");
    }

    #[tokio::test]
    async fn test_empty_fields_param_returns_full_state() {
        let query = DeviceStateQuery {
            fields: Some(String::new()),
        };
        let Json(body) = device_state(Query(query)).await;
        assert_eq!(body.as_object().unwrap().len(), 19);
    }
}
