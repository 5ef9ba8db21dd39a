use std::future::Future;

use axum::Router;
use configs::{AppConfig, StorageConfig};
use service::file::Collections;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Make sure the data directory and both collection files exist, then bind
/// the stores to them. Existing files are never rewritten here.
pub async fn prepare_storage(cfg: &StorageConfig) -> Result<Collections, StartupError> {
    common::env::ensure_data_dir(&cfg.data_dir)
        .await
        .map_err(|e| StartupError::Storage(e.to_string()))?;
    for path in [cfg.flights_path(), cfg.cities_path()] {
        common::env::seed_collection(&path)
            .await
            .map_err(|e| StartupError::Storage(e.to_string()))?;
    }
    Ok(Collections::from_config(cfg))
}

/// Build the application router for the given storage configuration.
pub async fn build_app(cfg: &StorageConfig) -> Result<Router, StartupError> {
    let collections = prepare_storage(cfg).await?;
    Ok(routes::build_router(ServerState::from(collections), build_cors()))
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "flightdesk server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, starting graceful shutdown");
    }
}

/// Public entry: prepare storage and run the HTTP server until Ctrl+C
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    info!(
        flights = %cfg.storage.flights_path().display(),
        cities = %cfg.storage.cities_path().display(),
        "collection files"
    );
    let app = build_app(&cfg.storage).await?;

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    serve(listener, app, shutdown_signal()).await
}
