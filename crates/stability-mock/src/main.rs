use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stability_mock::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::default();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("stability_mock={},tower_http=debug", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(listen_addr = %config.listen_addr, "Starting stability-mock");

    let state = Arc::new(AppState::new());
    let app = create_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    tracing::info!(?addr, "Mock stability server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
