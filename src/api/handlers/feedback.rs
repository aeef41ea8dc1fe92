//! Event feedback handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::server::AppState;
use crate::models::feedback::{Feedback, CreateFeedbackRequest};
use crate::models::pagination::{Page, PageParams};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackBody {
    pub user_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Leave feedback on an event
pub async fn submit(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(body): Json<FeedbackBody>,
) -> Result<(StatusCode, Json<Feedback>), ClubHubError> {
    let request = CreateFeedbackRequest {
        event_id,
        user_id: body.user_id,
        rating: body.rating,
        comment: body.comment,
    };

    let feedback = state.db.submit_feedback(request).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// Feedback left on an event
pub async fn list_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Feedback>>, ClubHubError> {
    state.db.events.find_by_id(event_id).await?
        .ok_or(ClubHubError::EventNotFound { event_id })?;

    let params = PageParams { limit: query.limit, offset: query.offset };
    let items = state.db.feedback.list_for_event(event_id, params.limit(), params.offset()).await?;
    let total = state.db.feedback.count_for_event(event_id).await?;

    Ok(Json(Page::new(items, total, params)))
}

/// Delete feedback
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClubHubError> {
    state.db.feedback.find_by_id(id).await?
        .ok_or(ClubHubError::FeedbackNotFound { feedback_id: id })?;

    state.db.feedback.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
