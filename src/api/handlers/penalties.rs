//! Penalty rule and record handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::server::AppState;
use crate::models::pagination::{Page, PageParams};
use crate::models::penalty::{PenaltyRule, PenaltyRecord, CreatePenaltyRuleRequest, UpdatePenaltyRuleRequest, IssuePenaltyRequest};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Create a discipline rule
pub async fn create_rule(
    State(state): State<AppState>,
    Json(request): Json<CreatePenaltyRuleRequest>,
) -> Result<(StatusCode, Json<PenaltyRule>), ClubHubError> {
    let rule = state.services.penalty_service.create_rule(request).await?;
    Ok((StatusCode::CREATED, Json(rule)))
}

/// List rules
pub async fn list_rules(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<PenaltyRule>>, ClubHubError> {
    let params = PageParams { limit: query.limit, offset: query.offset };
    let page = state.services.penalty_service.list_rules(params).await?;
    Ok(Json(page))
}

/// One rule
pub async fn rule_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PenaltyRule>, ClubHubError> {
    let rule = state.services.penalty_service.get_rule(id).await?;
    Ok(Json(rule))
}

/// Update a rule
pub async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePenaltyRuleRequest>,
) -> Result<Json<PenaltyRule>, ClubHubError> {
    let rule = state.services.penalty_service.update_rule(id, request).await?;
    Ok(Json(rule))
}

/// Delete a rule with no issued records
pub async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClubHubError> {
    state.services.penalty_service.delete_rule(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Issue a penalty under a rule
pub async fn issue(
    State(state): State<AppState>,
    Json(request): Json<IssuePenaltyRequest>,
) -> Result<(StatusCode, Json<PenaltyRecord>), ClubHubError> {
    let record = state.services.penalty_service.issue(request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Penalties issued to a member
pub async fn for_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PenaltyRecord>>, ClubHubError> {
    let params = PageParams { limit: query.limit, offset: query.offset };
    let records = state.services.penalty_service.records_for_user(id, params).await?;
    Ok(Json(records))
}

/// Penalties recorded against a club
pub async fn for_club(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PenaltyRecord>>, ClubHubError> {
    let params = PageParams { limit: query.limit, offset: query.offset };
    let records = state.services.penalty_service.records_for_club(id, params).await?;
    Ok(Json(records))
}
