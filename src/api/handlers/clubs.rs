//! Club, roster, and activity score handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::server::AppState;
use crate::models::club::{Club, ClubMember, CreateClubRequest, UpdateClubRequest, AddMemberRequest};
use crate::models::pagination::{Page, PageParams};
use crate::services::scoring::ScoreBreakdown;
use crate::utils::errors::ClubHubError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AddMemberBody {
    pub user_id: i64,
    pub role: Option<String>,
}

/// Create a club
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateClubRequest>,
) -> Result<(StatusCode, Json<Club>), ClubHubError> {
    if request.name.trim().is_empty() {
        return Err(ClubHubError::InvalidInput("Club name is required".to_string()));
    }

    let club = state.db.clubs.create(request).await?;
    Ok((StatusCode::CREATED, Json(club)))
}

/// List clubs
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Club>>, ClubHubError> {
    let params = PageParams { limit: query.limit, offset: query.offset };
    let items = state.db.clubs.list(params.limit(), params.offset()).await?;
    let total = state.db.clubs.count().await?;

    Ok(Json(Page::new(items, total, params)))
}

/// One club
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Club>, ClubHubError> {
    let club = state.db.clubs.find_by_id(id).await?
        .ok_or(ClubHubError::ClubNotFound { club_id: id })?;

    Ok(Json(club))
}

/// Update a club
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateClubRequest>,
) -> Result<Json<Club>, ClubHubError> {
    state.db.clubs.find_by_id(id).await?
        .ok_or(ClubHubError::ClubNotFound { club_id: id })?;

    let club = state.db.clubs.update(id, request).await?;
    Ok(Json(club))
}

/// Delete a club; roster, events, and chat history go with it
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClubHubError> {
    state.db.clubs.find_by_id(id).await?
        .ok_or(ClubHubError::ClubNotFound { club_id: id })?;

    state.db.clubs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a member to the roster
pub async fn add_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<AddMemberBody>,
) -> Result<(StatusCode, Json<ClubMember>), ClubHubError> {
    let request = AddMemberRequest {
        club_id: id,
        user_id: body.user_id,
        role: body.role,
    };

    let member = state.db.add_member_to_club(request).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// Club roster
pub async fn members(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<ClubMember>>, ClubHubError> {
    state.db.clubs.find_by_id(id).await?
        .ok_or(ClubHubError::ClubNotFound { club_id: id })?;

    let params = PageParams { limit: query.limit, offset: query.offset };
    let items = state.db.clubs.get_members(id, params.limit(), params.offset()).await?;
    let total = state.db.clubs.count_members(id).await?;

    Ok(Json(Page::new(items, total, params)))
}

/// Remove a member from the roster
pub async fn remove_member(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ClubHubError> {
    if !state.db.clubs.is_member(id, user_id).await? {
        return Err(ClubHubError::InvalidInput(
            "User is not a member of this club".to_string()
        ));
    }

    state.db.clubs.remove_member(id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// A club's activity score breakdown
pub async fn score(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ScoreBreakdown>, ClubHubError> {
    let breakdown = state.services.scoring_service.club_score(id).await?;
    Ok(Json(breakdown))
}

/// Activity scores for one page of clubs
pub async fn scores(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ScoreBreakdown>>, ClubHubError> {
    let params = PageParams { limit: query.limit, offset: query.offset };
    let breakdowns = state.services.scoring_service
        .club_scores(params.limit(), params.offset())
        .await?;

    Ok(Json(breakdowns))
}
