//! Control endpoint handlers.
//!
//! All three endpoints share the pipeline in `models::control`: presence
//! check, platform range check, state enumeration check, then a logged
//! acknowledgment. The mock executes nothing against hardware.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use tracing::{info, warn};

use crate::error::{ApiError, Result};
use crate::models::{ControlAck, PlatformControlRequest, SupportControlRequest};

fn reject_body(err: JsonRejection) -> ApiError {
    ApiError::validation(format!("invalid request body: {err}"))
}

/// `POST /stability/support/control`.
pub async fn support_control(
    payload: std::result::Result<Json<SupportControlRequest>, JsonRejection>,
) -> Result<Json<ControlAck>> {
    let Json(request) = payload.map_err(reject_body)?;

    let cmd = request.validate().inspect_err(|err| {
        warn!(%err, "support control rejected");
    })?;

    info!(
        task_id = cmd.task_id,
        defect_id = cmd.defect_id,
        state = %cmd.state,
        "support control accepted"
    );

    Ok(Json(ControlAck::success()))
}

/// `POST /stability/platformHeight/control`.
pub async fn platform_height_control(
    payload: std::result::Result<Json<PlatformControlRequest>, JsonRejection>,
) -> Result<Json<ControlAck>> {
    let Json(request) = payload.map_err(reject_body)?;

    let cmd = request.validate_height().inspect_err(|err| {
        warn!(%err, "platform height control rejected");
    })?;

    info!(
        task_id = cmd.task_id,
        defect_id = cmd.defect_id,
        platform = %cmd.platform,
        state = %cmd.state,
        "platform height control accepted"
    );

    Ok(Json(ControlAck::success()))
}

/// `POST /stability/platformHorizontal/control`.
pub async fn platform_horizontal_control(
    payload: std::result::Result<Json<PlatformControlRequest>, JsonRejection>,
) -> Result<Json<ControlAck>> {
    let Json(request) = payload.map_err(reject_body)?;

    let cmd = request.validate_level().inspect_err(|err| {
        warn!(%err, "platform leveling control rejected");
    })?;

    info!(
        task_id = cmd.task_id,
        defect_id = cmd.defect_id,
        platform = %cmd.platform,
        state = %cmd.state,
        "platform leveling control accepted"
    );

    Ok(Json(ControlAck::success()))
}
