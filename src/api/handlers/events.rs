//! Event request handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::server::AppState;
use crate::models::event::{Event, EventDetail, CreateEventRequest, UpdateEventRequest, EventSummary};
use crate::models::pagination::{Page, PageParams};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    pub status: Option<String>,
    pub club_id: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub club_id: Option<i64>,
}

/// Submit a new event request
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventDetail>), ClubHubError> {
    let detail = state.services.event_service.submit_request(request).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// List events with optional filters
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Page<Event>>, ClubHubError> {
    let params = PageParams { limit: query.limit, offset: query.offset };
    let page = state.services.event_service
        .list(query.status, query.club_id, params)
        .await?;

    Ok(Json(page))
}

/// Event counts per workflow state
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<EventSummary>, ClubHubError> {
    let summary = state.services.event_service.summary(query.club_id).await?;
    Ok(Json(summary))
}

/// One event with its day schedule
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EventDetail>, ClubHubError> {
    let detail = state.services.event_service.get_detail(id).await?;
    Ok(Json(detail))
}

/// Edit a pending request
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<EventDetail>, ClubHubError> {
    let detail = state.services.event_service.update_request(id, request).await?;
    Ok(Json(detail))
}

/// Delete an event
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClubHubError> {
    state.services.event_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Approve a pending request (strict conflict re-check)
pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Event>, ClubHubError> {
    let event = state.services.event_service.approve(id).await?;
    Ok(Json(event))
}

/// Reject a pending request
pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Event>, ClubHubError> {
    let event = state.services.event_service.reject(id).await?;
    Ok(Json(event))
}

/// Mark an approved event as running
pub async fn start(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Event>, ClubHubError> {
    let event = state.services.event_service.start(id).await?;
    Ok(Json(event))
}

/// Mark a running event as completed
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Event>, ClubHubError> {
    let event = state.services.event_service.complete(id).await?;
    Ok(Json(event))
}
