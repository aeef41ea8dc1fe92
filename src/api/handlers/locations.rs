//! Location handlers, including the slot availability endpoint

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::server::AppState;
use crate::models::location::{Location, CreateLocationRequest, UpdateLocationRequest};
use crate::models::pagination::{Page, PageParams};
use crate::services::scheduling::DayAvailability;
use crate::utils::errors::ClubHubError;

#[derive(Debug, Deserialize)]
pub struct LocationListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
}

/// Create a location
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<Location>), ClubHubError> {
    if request.name.trim().is_empty() {
        return Err(ClubHubError::InvalidInput("Location name is required".to_string()));
    }

    if request.capacity < 0 {
        return Err(ClubHubError::InvalidInput("Capacity cannot be negative".to_string()));
    }

    let location = state.db.locations.create(request).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// List all locations
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LocationListQuery>,
) -> Result<Json<Page<Location>>, ClubHubError> {
    let params = PageParams { limit: query.limit, offset: query.offset };
    let items = state.db.locations.list(params.limit(), params.offset()).await?;
    let total = state.db.locations.count().await?;

    Ok(Json(Page::new(items, total, params)))
}

/// List locations open for booking
pub async fn list_active(
    State(state): State<AppState>,
) -> Result<Json<Vec<Location>>, ClubHubError> {
    let locations = state.db.locations.list_active().await?;
    Ok(Json(locations))
}

/// One location
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Location>, ClubHubError> {
    let location = state.db.locations.find_by_id(id).await?
        .ok_or(ClubHubError::LocationNotFound { location_id: id })?;

    Ok(Json(location))
}

/// Update a location
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateLocationRequest>,
) -> Result<Json<Location>, ClubHubError> {
    state.db.locations.find_by_id(id).await?
        .ok_or(ClubHubError::LocationNotFound { location_id: id })?;

    let location = state.db.locations.update(id, request).await?;
    Ok(Json(location))
}

/// Delete a location
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClubHubError> {
    state.db.locations.find_by_id(id).await?
        .ok_or(ClubHubError::LocationNotFound { location_id: id })?;

    state.db.locations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Slot availability for a location on one date.
///
/// The location must exist; beyond that the lookup never fails the request.
/// A broken booking query reads as a fully free day.
pub async fn availability(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<DayAvailability>, ClubHubError> {
    state.db.locations.find_by_id(id).await?
        .ok_or(ClubHubError::LocationNotFound { location_id: id })?;

    let availability = state.services.scheduling_service
        .day_availability(id, query.date)
        .await;

    Ok(Json(availability))
}
