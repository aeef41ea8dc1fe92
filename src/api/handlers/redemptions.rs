//! Redemption order handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::server::AppState;
use crate::models::pagination::{Page, PageParams};
use crate::models::redemption::{RedemptionOrder, PlaceOrderRequest};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub user_id: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Place an order
pub async fn place(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<RedemptionOrder>), ClubHubError> {
    let order = state.services.redemption_service.place(request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List orders with optional filters
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Page<RedemptionOrder>>, ClubHubError> {
    let params = PageParams { limit: query.limit, offset: query.offset };
    let page = state.services.redemption_service
        .list(query.status, query.user_id, params)
        .await?;

    Ok(Json(page))
}

/// One order
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RedemptionOrder>, ClubHubError> {
    let order = state.services.redemption_service.get(id).await?;
    Ok(Json(order))
}

/// Mark an order picked up
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RedemptionOrder>, ClubHubError> {
    let order = state.services.redemption_service.complete(id).await?;
    Ok(Json(order))
}

/// Cancel an order and refund its points
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RedemptionOrder>, ClubHubError> {
    let order = state.services.redemption_service.cancel(id).await?;
    Ok(Json(order))
}
