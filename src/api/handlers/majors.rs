//! Major handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::server::AppState;
use crate::models::major::{Major, CreateMajorRequest, UpdateMajorRequest};
use crate::utils::errors::ClubHubError;

/// Create a major
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateMajorRequest>,
) -> Result<(StatusCode, Json<Major>), ClubHubError> {
    if request.name.trim().is_empty() {
        return Err(ClubHubError::InvalidInput("Major name is required".to_string()));
    }

    let major = state.db.majors.create(request).await?;
    Ok((StatusCode::CREATED, Json(major)))
}

/// The full majors reference list
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<Major>>, ClubHubError> {
    let majors = state.db.majors.list().await?;
    Ok(Json(majors))
}

/// One major
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Major>, ClubHubError> {
    let major = state.db.majors.find_by_id(id).await?
        .ok_or(ClubHubError::MajorNotFound { major_id: id })?;

    Ok(Json(major))
}

/// Update a major
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateMajorRequest>,
) -> Result<Json<Major>, ClubHubError> {
    state.db.majors.find_by_id(id).await?
        .ok_or(ClubHubError::MajorNotFound { major_id: id })?;

    let major = state.db.majors.update(id, request).await?;
    Ok(Json(major))
}

/// Delete a major; refuses while members still reference it
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClubHubError> {
    state.db.majors.find_by_id(id).await?
        .ok_or(ClubHubError::MajorNotFound { major_id: id })?;

    let members = state.db.users.count_by_major(id).await?;
    if members > 0 {
        return Err(ClubHubError::InvalidInput(
            format!("{} members are still enrolled in this major", members)
        ));
    }

    state.db.majors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
