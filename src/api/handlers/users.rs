//! Member roster handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::server::AppState;
use crate::models::pagination::{Page, PageParams};
use crate::models::user::{User, CreateUserRequest, UpdateUserRequest};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Register a new member
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ClubHubError> {
    let user = state.db.register_member(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List members
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<User>>, ClubHubError> {
    let params = PageParams { limit: query.limit, offset: query.offset };
    let items = state.db.users.list(params.limit(), params.offset()).await?;
    let total = state.db.users.count().await?;

    Ok(Json(Page::new(items, total, params)))
}

/// One member
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ClubHubError> {
    let user = state.db.users.find_by_id(id).await?
        .ok_or(ClubHubError::UserNotFound { user_id: id })?;

    Ok(Json(user))
}

/// Update a member profile
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<User>, ClubHubError> {
    state.db.users.find_by_id(id).await?
        .ok_or(ClubHubError::UserNotFound { user_id: id })?;

    if let Some(ref email) = request.email {
        if !crate::utils::helpers::is_valid_email(email) {
            return Err(ClubHubError::InvalidInput(format!("Invalid email: {}", email)));
        }
    }

    if let Some(major_id) = request.major_id {
        if state.db.majors.find_by_id(major_id).await?.is_none() {
            return Err(ClubHubError::MajorNotFound { major_id });
        }
    }

    let user = state.db.users.update(id, request).await?;
    Ok(Json(user))
}

/// Profile, clubs, and wallet in one response
pub async fn dashboard(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ClubHubError> {
    let dashboard = state.db.member_dashboard(id).await?;
    Ok(Json(dashboard))
}
