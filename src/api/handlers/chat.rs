//! Club chat handlers
//!
//! The message feed is polled with `before`/`after` timestamp cursors;
//! `with_pins=true` merges the club's pinned messages into the window.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::server::AppState;
use crate::models::chat::{ChatMessage, ChatReaction, ChatPin, SendMessageRequest, ReactRequest, ChatWindow};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub with_pins: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PinBody {
    pub message_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ReactionState {
    pub message_id: i64,
    pub active: bool,
}

/// Send a message into a club channel
pub async fn send(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessage>), ClubHubError> {
    let message = state.services.chat_service.send(club_id, request).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// Poll a message window
pub async fn window(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<Vec<ChatMessage>>, ClubHubError> {
    let window = ChatWindow {
        before: query.before,
        after: query.after,
        limit: query.limit,
    };

    let messages = if query.with_pins.unwrap_or(false) {
        state.services.chat_service.window_with_pins(club_id, window).await?
    } else {
        state.services.chat_service.window(club_id, window).await?
    };

    Ok(Json(messages))
}

/// Delete a message
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClubHubError> {
    state.services.chat_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Toggle a reaction on a message
pub async fn react(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ReactRequest>,
) -> Result<Json<ReactionState>, ClubHubError> {
    let active = state.services.chat_service.react(id, request).await?;
    Ok(Json(ReactionState { message_id: id, active }))
}

/// Reactions on a message
pub async fn reactions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ChatReaction>>, ClubHubError> {
    let reactions = state.services.chat_service.reactions(id).await?;
    Ok(Json(reactions))
}

/// Pin a message in a club channel
pub async fn pin(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Json(body): Json<PinBody>,
) -> Result<(StatusCode, Json<ChatPin>), ClubHubError> {
    let pin = state.services.chat_service.pin(club_id, body.message_id).await?;
    Ok((StatusCode::CREATED, Json(pin)))
}

/// Unpin a message
pub async fn unpin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClubHubError> {
    state.services.chat_service.unpin(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Pinned messages of a club
pub async fn pinned(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Json<Vec<ChatMessage>>, ClubHubError> {
    let messages = state.services.chat_service.pinned(club_id).await?;
    Ok(Json(messages))
}
