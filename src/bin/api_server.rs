// src/bin/api_server.rs

use collection_api::infra::telemetry::{get_subscriber, init_subscriber};
use collection_api::transport;
use collection_api::{DatabaseService, Settings};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    init_subscriber(get_subscriber(&settings.log_filter))?;

    // --- Data source initialization ---
    info!("initializing DatabaseService");
    let db_service = DatabaseService::connect(&settings).await?;
    let app_state = transport::http::AppState::new(Arc::new(db_service));

    // --- API server initialization ---
    let app = transport::http::create_app(app_state);
    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!("API server listening on http://{}", local_addr);
    info!("Swagger UI available at http://{}/swagger-ui", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received (Ctrl+C)"),
        Err(e) => tracing::error!(error = %e, "failed to listen for Ctrl+C"),
    }
}
