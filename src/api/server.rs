//! HTTP API server
//!
//! Builds the axum application and runs it until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use axum::middleware;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::settings::Settings;
use crate::database::{DatabasePool, DatabaseService};
use crate::middleware::{log_requests, rate_limit, RateLimiter};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

use super::routes::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: DatabasePool,
    pub db: DatabaseService,
    pub services: Arc<ServiceFactory>,
    pub settings: Settings,
}

/// Start the HTTP API server; resolves once the server has shut down
pub async fn start_server(
    settings: Settings,
    pool: DatabasePool,
    db: DatabaseService,
    services: ServiceFactory,
) -> Result<()> {
    let state = AppState {
        pool,
        db,
        services: Arc::new(services),
        settings: settings.clone(),
    };

    let limiter = Arc::new(RateLimiter::default());

    let app = routes(&settings)
        .layer(middleware::from_fn_with_state(limiter, rate_limit))
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .map_err(|e| crate::utils::errors::ClubHubError::Config(
            format!("Invalid server address: {}", e)
        ))?;

    info!("ClubHub API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
