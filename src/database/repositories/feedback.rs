//! Feedback repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::feedback::{Feedback, CreateFeedbackRequest};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateFeedbackRequest) -> Result<Feedback, ClubHubError> {
        let feedback = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (event_id, user_id, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, event_id, user_id, rating, comment, created_at
            "#
        )
        .bind(request.event_id)
        .bind(request.user_id)
        .bind(request.rating)
        .bind(request.comment)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(feedback)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Feedback>, ClubHubError> {
        let feedback = sqlx::query_as::<_, Feedback>(
            "SELECT id, event_id, user_id, rating, comment, created_at FROM feedback WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(feedback)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClubHubError> {
        sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Feedback left on one event, newest first
    pub async fn list_for_event(&self, event_id: i64, limit: i64, offset: i64) -> Result<Vec<Feedback>, ClubHubError> {
        let feedback = sqlx::query_as::<_, Feedback>(
            "SELECT id, event_id, user_id, rating, comment, created_at FROM feedback WHERE event_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        )
        .bind(event_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(feedback)
    }

    pub async fn count_for_event(&self, event_id: i64) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM feedback WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Average rating across all feedback on a club's events
    pub async fn average_rating_for_club(&self, club_id: i64) -> Result<Option<f64>, ClubHubError> {
        let avg: (Option<f64>,) = sqlx::query_as(
            r#"
            SELECT AVG(f.rating)::FLOAT8
            FROM feedback f
            INNER JOIN events e ON e.id = f.event_id
            WHERE e.club_id = $1
            "#
        )
        .bind(club_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(avg.0)
    }
}
