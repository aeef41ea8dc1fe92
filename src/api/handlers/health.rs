//! Health check handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::server::AppState;
use crate::database;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
    pub cache: bool,
}

/// Liveness endpoint reporting database and cache reachability
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = database::health_check(&state.pool).await.is_ok();
    let cache = state.services.cache_service.health_check().await.unwrap_or(false);

    let status = if database { "ok" } else { "degraded" };

    Json(HealthResponse { status, database, cache })
}
