// src/bin/api_server.rs

use ride_service::infra::telemetry;
use ride_service::transport;
use ride_service::{Config, RideStore, SqliteRideStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    // Dropping the guard flushes pending log lines, so it lives until main returns.
    let _log_guard = telemetry::init_tracing(&config)?;

    // --- Store Initialization ---
    info!("initializing ride store");
    let store = SqliteRideStore::connect(&config.database_url, config.max_connections).await?;
    if config.clear_db {
        warn!("CLEAR_DB=true, dropping existing rides");
        store.reset().await?;
    }
    store.initialize().await?;
    let store: Arc<dyn RideStore> = Arc::new(store);

    // --- API Server Initialization ---
    let app_state = transport::http::AppState::new(store);
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "app started and listening");
    info!("swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
