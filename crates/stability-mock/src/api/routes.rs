use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::{callback, control, device, health, report};
use crate::api::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            health::health,
            health::system_status,
        ),
        components(schemas(
            health::HealthResponse,
            health::SystemStatus,
            crate::models::DeviceState,
            crate::models::SupportControlRequest,
            crate::models::PlatformControlRequest,
            crate::models::ControlAck,
            crate::models::SupportCallback,
            crate::models::PlatformCallback,
            crate::models::CallbackEcho,
            crate::models::CallbackReply,
            crate::models::ErrorReport,
            crate::models::ReportAck,
        )),
        tags(
            (name = "stability-mock", description = "Mock stability-control API")
        )
    )]
    struct ApiDoc;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health))
        .route("/stability/system/status", get(health::system_status))
        .route("/stability/device/state", get(device::device_state))
        .route("/stability/support/control", post(control::support_control))
        .route(
            "/stability/platformHeight/control",
            post(control::platform_height_control),
        )
        .route(
            "/stability/platformHorizontal/control",
            post(control::platform_horizontal_control),
        )
        .route(
            "/business/task/stability/support/cback",
            post(callback::support_callback),
        )
        .route(
            "/business/task/stability/platformHeight/cback",
            post(callback::platform_height_callback),
        )
        .route(
            "/business/task/stability/platformHorizontal/cback",
            post(callback::platform_horizontal_callback),
        )
        .route("/stability/error/report", post(report::error_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
