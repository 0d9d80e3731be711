//! Error report receiver.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::models::{ErrorReport, ReportAck};

/// `POST /stability/error/report`.
///
/// Best-effort: the optional millisecond timestamp is converted to a
/// readable form for the log line when possible and ignored otherwise.
/// The report is always acknowledged.
pub async fn error_report(
    payload: std::result::Result<Json<ErrorReport>, JsonRejection>,
) -> Result<Json<ReportAck>> {
    let Json(report) = payload
        .map_err(|err| ApiError::internal(format!("error while processing report: {err}")))?;

    match report.readable_timestamp() {
        Some(time) => info!(
            alarm = %report.alarm,
            state = %report.state,
            %time,
            "error report received"
        ),
        None => info!(
            alarm = %report.alarm,
            state = %report.state,
            "error report received"
        ),
    }

    Ok(Json(ReportAck::success()))
}
