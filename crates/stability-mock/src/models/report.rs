//! Error report payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_alarm() -> String {
    "unknown alarm".to_string()
}

fn default_state() -> String {
    "error".to_string()
}

/// Payload of `POST /stability/error/report`.
///
/// Every field is optional on the wire; the report is always acknowledged.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ErrorReport {
    #[serde(default = "default_alarm")]
    pub alarm: String,
    #[serde(default = "default_state")]
    pub state: String,
    /// Optional millisecond epoch timestamp.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl ErrorReport {
    /// Best-effort readable form of the reported timestamp.
    ///
    /// A timestamp that cannot be converted is ignored, not an error.
    #[must_use]
    pub fn readable_timestamp(&self) -> Option<String> {
        self.timestamp
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Fixed acknowledgment for a processed report.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportAck {
    pub code: u16,
    pub msg: &'static str,
}

impl ReportAck {
    #[must_use]
    pub fn success() -> Self {
        Self {
            code: 200,
            msg: "error report processed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let report: ErrorReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.alarm, "unknown alarm");
        assert_eq!(report.state, "error");
        assert!(report.timestamp.is_none());
    }

    #[test]
    fn test_readable_timestamp() {
        let report: ErrorReport =
            serde_json::from_str(r#"{"alarm":"oil pressure low","timestamp":1700000000000}"#)
                .unwrap();
        let readable = report.readable_timestamp().unwrap();
        assert!(readable.starts_with("2023-11-14"));
    }

    #[test]
    fn test_unconvertible_timestamp_ignored() {
        let report: ErrorReport =
            serde_json::from_str(r#"{"timestamp":9223372036854775807}"#).unwrap();
        assert!(report.readable_timestamp().is_none());
    }
}
