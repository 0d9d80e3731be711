//! Callback receiver handlers.
//!
//! A callback asserts the outcome of a previously issued control command.
//! Nothing is correlated or stored; the receiver logs the notification and
//! echoes the identifying fields back. A body that cannot be decoded is an
//! unexpected failure, not a validation error.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::models::{CallbackEcho, CallbackReply, PlatformCallback, SupportCallback};

fn reject_body(err: JsonRejection) -> ApiError {
    ApiError::internal(format!("error while processing callback: {err}"))
}

/// `POST /business/task/stability/support/cback`.
pub async fn support_callback(
    payload: std::result::Result<Json<SupportCallback>, JsonRejection>,
) -> Result<Json<CallbackReply>> {
    let Json(cb) = payload.map_err(reject_body)?;

    info!(
        task_id = cb.task_id,
        defect_id = cb.defect_id,
        state = cb.state.as_deref(),
        "support callback received"
    );

    let echo = CallbackEcho::from_support(cb);
    Ok(Json(CallbackReply::new("support callback processed", echo)))
}

/// `POST /business/task/stability/platformHeight/cback`.
pub async fn platform_height_callback(
    payload: std::result::Result<Json<PlatformCallback>, JsonRejection>,
) -> Result<Json<CallbackReply>> {
    let Json(cb) = payload.map_err(reject_body)?;

    info!(
        task_id = cb.task_id,
        defect_id = cb.defect_id,
        platform_num = cb.platform_num,
        state = cb.state.as_deref(),
        "platform height callback received"
    );

    let echo = CallbackEcho::from_platform(cb);
    Ok(Json(CallbackReply::new(
        "platform height callback processed",
        echo,
    )))
}

/// `POST /business/task/stability/platformHorizontal/cback`.
pub async fn platform_horizontal_callback(
    payload: std::result::Result<Json<PlatformCallback>, JsonRejection>,
) -> Result<Json<CallbackReply>> {
    let Json(cb) = payload.map_err(reject_body)?;

    info!(
        task_id = cb.task_id,
        defect_id = cb.defect_id,
        platform_num = cb.platform_num,
        state = cb.state.as_deref(),
        "platform leveling callback received"
    );

    let echo = CallbackEcho::from_platform(cb);
    Ok(Json(CallbackReply::new(
        "platform leveling callback processed",
        echo,
    )))
}
