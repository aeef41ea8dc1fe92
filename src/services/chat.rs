//! Club chat service
//!
//! History reads are cursor windows over (club, sent_at). Clients poll with
//! their newest seen timestamp as `after`; merging here is id-keyed so a
//! message can never appear twice in one assembled view, whatever windows
//! the poller has already seen.

use std::collections::HashSet;
use tracing::debug;
use crate::database::DatabaseService;
use crate::models::chat::{ChatMessage, ChatReaction, ChatPin, SendMessageRequest, ReactRequest, ChatWindow};
use crate::utils::errors::{ClubHubError, Result};
use crate::utils::helpers;

const DEFAULT_WINDOW: i64 = 50;
const MAX_WINDOW: i64 = 200;
const MAX_BODY_LEN: usize = 2000;

/// Merge two message lists into one view ordered by (sent_at, id),
/// dropping any message whose id was already seen.
pub fn merge_by_id(base: Vec<ChatMessage>, extra: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let mut seen: HashSet<i64> = HashSet::new();
    let mut merged: Vec<ChatMessage> = Vec::with_capacity(base.len() + extra.len());

    for message in base.into_iter().chain(extra) {
        if seen.insert(message.id) {
            merged.push(message);
        }
    }

    merged.sort_by(|a, b| a.sent_at.cmp(&b.sent_at).then(a.id.cmp(&b.id)));
    merged
}

/// Club chat service
#[derive(Clone)]
pub struct ChatService {
    db: DatabaseService,
}

impl ChatService {
    /// Create a new ChatService instance
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Send a message into a club channel
    pub async fn send(&self, club_id: i64, request: SendMessageRequest) -> Result<ChatMessage> {
        self.require_club(club_id).await?;

        let body = helpers::normalize_whitespace(&request.body);
        if body.is_empty() {
            return Err(ClubHubError::InvalidInput("Message body is required".to_string()));
        }

        if body.len() > MAX_BODY_LEN {
            return Err(ClubHubError::InvalidInput(
                format!("Message body exceeds {} characters", MAX_BODY_LEN)
            ));
        }

        let user_id = request.sender_id;
        if self.db.users.find_by_id(user_id).await?.is_none() {
            return Err(ClubHubError::UserNotFound { user_id });
        }

        let message = self.db.chat.insert_message(club_id, request.sender_id, &body).await?;
        debug!(club_id = club_id, message_id = message.id, "Chat message sent");

        Ok(message)
    }

    /// Messages within a cursor window, oldest first
    pub async fn window(&self, club_id: i64, query: ChatWindow) -> Result<Vec<ChatMessage>> {
        self.require_club(club_id).await?;

        let limit = query.limit.unwrap_or(DEFAULT_WINDOW).clamp(1, MAX_WINDOW);
        self.db.chat.window(club_id, query.after, query.before, limit).await
    }

    /// A cursor window with the club's pinned messages merged in
    pub async fn window_with_pins(&self, club_id: i64, query: ChatWindow) -> Result<Vec<ChatMessage>> {
        let window = self.window(club_id, query).await?;
        let pinned = self.db.chat.pinned_messages(club_id).await?;

        Ok(merge_by_id(window, pinned))
    }

    /// Soft-delete a message
    pub async fn delete(&self, message_id: i64) -> Result<()> {
        let message = self.require_message(message_id).await?;

        if message.deleted {
            return Err(ClubHubError::MessageNotFound { message_id });
        }

        self.db.chat.delete_message(message_id).await
    }

    /// Toggle a reaction; returns true when the reaction now exists
    pub async fn react(&self, message_id: i64, request: ReactRequest) -> Result<bool> {
        if request.emoji.trim().is_empty() {
            return Err(ClubHubError::InvalidInput("Reaction emoji is required".to_string()));
        }

        self.require_message(message_id).await?;
        self.db.chat.toggle_reaction(message_id, request.user_id, &request.emoji).await
    }

    /// Reactions on a message
    pub async fn reactions(&self, message_id: i64) -> Result<Vec<ChatReaction>> {
        self.require_message(message_id).await?;
        self.db.chat.reactions(message_id).await
    }

    /// Pin a message in its club channel
    pub async fn pin(&self, club_id: i64, message_id: i64) -> Result<ChatPin> {
        let message = self.require_message(message_id).await?;

        if message.club_id != club_id {
            return Err(ClubHubError::InvalidInput(
                "Message does not belong to this club".to_string()
            ));
        }

        self.db.chat.pin(club_id, message_id).await
    }

    /// Unpin a message
    pub async fn unpin(&self, message_id: i64) -> Result<()> {
        self.require_message(message_id).await?;
        self.db.chat.unpin(message_id).await
    }

    /// Pinned messages of a club
    pub async fn pinned(&self, club_id: i64) -> Result<Vec<ChatMessage>> {
        self.require_club(club_id).await?;
        self.db.chat.pinned_messages(club_id).await
    }

    async fn require_club(&self, club_id: i64) -> Result<()> {
        self.db.clubs.find_by_id(club_id).await?
            .map(|_| ())
            .ok_or(ClubHubError::ClubNotFound { club_id })
    }

    async fn require_message(&self, message_id: i64) -> Result<ChatMessage> {
        self.db.chat.find_message(message_id).await?
            .ok_or(ClubHubError::MessageNotFound { message_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(id: i64, minute: u32) -> ChatMessage {
        ChatMessage {
            id,
            club_id: 1,
            sender_id: 1,
            body: format!("message {}", id),
            sent_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
            deleted: false,
        }
    }

    #[test]
    fn test_merge_by_id_drops_duplicates() {
        let window = vec![message(1, 0), message(2, 1), message(3, 2)];
        let pinned = vec![message(2, 1), message(4, 3)];

        let merged = merge_by_id(window, pinned);
        let ids: Vec<i64> = merged.iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_merge_by_id_orders_by_time_then_id() {
        let older_pin = vec![message(5, 0)];
        let window = vec![message(7, 2), message(6, 1)];

        let merged = merge_by_id(window, older_pin);
        let ids: Vec<i64> = merged.iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![5, 6, 7]);
    }

    #[test]
    fn test_merge_by_id_ties_break_on_id() {
        // same timestamp, ids decide the order
        let a = message(10, 5);
        let b = message(9, 5);

        let merged = merge_by_id(vec![a], vec![b]);
        let ids: Vec<i64> = merged.iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![9, 10]);
    }

    #[test]
    fn test_merge_by_id_empty_inputs() {
        let merged = merge_by_id(Vec::new(), Vec::new());
        assert!(merged.is_empty());
    }
}
