//! Club chat models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    pub id: i64,
    pub club_id: i64,
    pub sender_id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatReaction {
    pub id: i64,
    pub message_id: i64,
    pub user_id: i64,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatPin {
    pub id: i64,
    pub club_id: i64,
    pub message_id: i64,
    pub pinned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub sender_id: i64,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactRequest {
    pub user_id: i64,
    pub emoji: String,
}

/// Cursor window for polling message history.
///
/// `after` and `before` are exclusive bounds; a poller passing its newest
/// seen timestamp as `after` receives only strictly newer messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatWindow {
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
}
