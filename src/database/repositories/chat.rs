//! Chat repository implementation
//!
//! Message history reads are cursor-driven: `before`/`after` are exclusive
//! timestamp bounds, so a poller that passes its newest seen timestamp never
//! receives a message twice from the same cursor.

use sqlx::PgPool;
use chrono::{DateTime, Utc};
use crate::models::chat::{ChatMessage, ChatReaction, ChatPin};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Clone)]
pub struct ChatRepository {
    pool: PgPool,
}

impl ChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a message to a club's channel
    pub async fn insert_message(&self, club_id: i64, sender_id: i64, body: &str) -> Result<ChatMessage, ClubHubError> {
        let message = sqlx::query_as::<_, ChatMessage>(
            r#"
            INSERT INTO chat_messages (club_id, sender_id, body, sent_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, club_id, sender_id, body, sent_at, deleted
            "#
        )
        .bind(club_id)
        .bind(sender_id)
        .bind(body)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    /// Find message by ID
    pub async fn find_message(&self, id: i64) -> Result<Option<ChatMessage>, ClubHubError> {
        let message = sqlx::query_as::<_, ChatMessage>(
            "SELECT id, club_id, sender_id, body, sent_at, deleted FROM chat_messages WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    /// Soft-delete a message; its row stays for pin/reaction integrity
    pub async fn delete_message(&self, id: i64) -> Result<(), ClubHubError> {
        sqlx::query("UPDATE chat_messages SET deleted = true WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Messages within an exclusive (after, before) window, oldest first
    pub async fn window(&self, club_id: i64, after: Option<DateTime<Utc>>, before: Option<DateTime<Utc>>, limit: i64) -> Result<Vec<ChatMessage>, ClubHubError> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT id, club_id, sender_id, body, sent_at, deleted
            FROM chat_messages
            WHERE club_id = $1
              AND deleted = false
              AND ($2::TIMESTAMPTZ IS NULL OR sent_at > $2)
              AND ($3::TIMESTAMPTZ IS NULL OR sent_at < $3)
            ORDER BY sent_at ASC, id ASC
            LIMIT $4
            "#
        )
        .bind(club_id)
        .bind(after)
        .bind(before)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Toggle a reaction; returns true when the reaction now exists
    pub async fn toggle_reaction(&self, message_id: i64, user_id: i64, emoji: &str) -> Result<bool, ClubHubError> {
        let removed = sqlx::query(
            "DELETE FROM chat_reactions WHERE message_id = $1 AND user_id = $2 AND emoji = $3"
        )
        .bind(message_id)
        .bind(user_id)
        .bind(emoji)
        .execute(&self.pool)
        .await?;

        if removed.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO chat_reactions (message_id, user_id, emoji, created_at) VALUES ($1, $2, $3, $4)"
        )
        .bind(message_id)
        .bind(user_id)
        .bind(emoji)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(true)
    }

    /// Reactions on a message
    pub async fn reactions(&self, message_id: i64) -> Result<Vec<ChatReaction>, ClubHubError> {
        let reactions = sqlx::query_as::<_, ChatReaction>(
            "SELECT id, message_id, user_id, emoji, created_at FROM chat_reactions WHERE message_id = $1 ORDER BY created_at ASC"
        )
        .bind(message_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reactions)
    }

    /// Pin a message in its club channel
    pub async fn pin(&self, club_id: i64, message_id: i64) -> Result<ChatPin, ClubHubError> {
        let pin = sqlx::query_as::<_, ChatPin>(
            r#"
            INSERT INTO chat_pins (club_id, message_id, pinned_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (message_id) DO UPDATE SET pinned_at = $3
            RETURNING id, club_id, message_id, pinned_at
            "#
        )
        .bind(club_id)
        .bind(message_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(pin)
    }

    /// Unpin a message
    pub async fn unpin(&self, message_id: i64) -> Result<(), ClubHubError> {
        sqlx::query("DELETE FROM chat_pins WHERE message_id = $1")
            .bind(message_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Pinned messages of a club, in pin order
    pub async fn pinned_messages(&self, club_id: i64) -> Result<Vec<ChatMessage>, ClubHubError> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT m.id, m.club_id, m.sender_id, m.body, m.sent_at, m.deleted
            FROM chat_messages m
            INNER JOIN chat_pins p ON p.message_id = m.id
            WHERE p.club_id = $1 AND m.deleted = false
            ORDER BY p.pinned_at ASC
            "#
        )
        .bind(club_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
