//! Event repository implementation
//!
//! Events and their day schedules are written together in one transaction so
//! a request can never land with half its days missing.

use sqlx::PgPool;
use chrono::{NaiveDate, Utc};
use crate::models::event::{Event, EventDay, EventDetail, EventDayInput, CreateEventRequest, UpdateEventRequest, EventSummary, EventStatus};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event request together with its day schedule
    pub async fn create(&self, request: CreateEventRequest) -> Result<EventDetail, ClubHubError> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, club_id, location_id, status, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, description, club_id, location_id, status, created_by, created_at, updated_at
            "#
        )
        .bind(request.title)
        .bind(request.description)
        .bind(request.club_id)
        .bind(request.location_id)
        .bind(EventStatus::Pending.as_str())
        .bind(request.created_by)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let mut days = Vec::with_capacity(request.days.len());
        for input in &request.days {
            let day = sqlx::query_as::<_, EventDay>(
                r#"
                INSERT INTO event_days (event_id, day, start_time, end_time)
                VALUES ($1, $2, $3, $4)
                RETURNING id, event_id, day, start_time, end_time
                "#
            )
            .bind(event.id)
            .bind(input.day)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(&mut *tx)
            .await?;
            days.push(day);
        }

        tx.commit().await?;

        Ok(EventDetail { event, days })
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, ClubHubError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, club_id, location_id, status, created_by, created_at, updated_at FROM events WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Get the day schedule of an event
    pub async fn get_days(&self, event_id: i64) -> Result<Vec<EventDay>, ClubHubError> {
        let days = sqlx::query_as::<_, EventDay>(
            "SELECT id, event_id, day, start_time, end_time FROM event_days WHERE event_id = $1 ORDER BY day ASC, start_time ASC"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(days)
    }

    /// Find event with its day schedule
    pub async fn find_detail(&self, id: i64) -> Result<Option<EventDetail>, ClubHubError> {
        let event = match self.find_by_id(id).await? {
            Some(event) => event,
            None => return Ok(None),
        };
        let days = self.get_days(id).await?;

        Ok(Some(EventDetail { event, days }))
    }

    /// Update event fields; a day list, when given, replaces the schedule
    pub async fn update(&self, id: i64, request: UpdateEventRequest) -> Result<Event, ClubHubError> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                location_id = COALESCE($4, location_id),
                updated_at = $5
            WHERE id = $1
            RETURNING id, title, description, club_id, location_id, status, created_by, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(request.title)
        .bind(request.description)
        .bind(request.location_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        if let Some(days) = request.days {
            sqlx::query("DELETE FROM event_days WHERE event_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for input in &days {
                self.insert_day(&mut tx, id, input).await?;
            }
        }

        tx.commit().await?;

        Ok(event)
    }

    async fn insert_day(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        event_id: i64,
        input: &EventDayInput,
    ) -> Result<EventDay, ClubHubError> {
        let day = sqlx::query_as::<_, EventDay>(
            r#"
            INSERT INTO event_days (event_id, day, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id, event_id, day, start_time, end_time
            "#
        )
        .bind(event_id)
        .bind(input.day)
        .bind(input.start_time)
        .bind(input.end_time)
        .fetch_one(&mut **tx)
        .await?;

        Ok(day)
    }

    /// Delete event (day schedule cascades)
    pub async fn delete(&self, id: i64) -> Result<(), ClubHubError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List events, optionally filtered by status and club
    pub async fn list(&self, status: Option<&str>, club_id: Option<i64>, limit: i64, offset: i64) -> Result<Vec<Event>, ClubHubError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, club_id, location_id, status, created_by, created_at, updated_at
            FROM events
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::BIGINT IS NULL OR club_id = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#
        )
        .bind(status)
        .bind(club_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Count events matching the list filters
    pub async fn count(&self, status: Option<&str>, club_id: Option<i64>) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM events
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::BIGINT IS NULL OR club_id = $2)
            "#
        )
        .bind(status)
        .bind(club_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    /// Summarize events per workflow state
    pub async fn summary(&self, club_id: Option<i64>) -> Result<EventSummary, ClubHubError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT status, COUNT(*)
            FROM events
            WHERE ($1::BIGINT IS NULL OR club_id = $1)
            GROUP BY status
            "#
        )
        .bind(club_id)
        .fetch_all(&self.pool)
        .await?;

        let mut summary = EventSummary::default();
        for (status, count) in rows {
            summary.total += count;
            match status.as_str() {
                "pending" => summary.pending = count,
                "approved" => summary.approved = count,
                "rejected" => summary.rejected = count,
                "ongoing" => summary.ongoing = count,
                "completed" => summary.completed = count,
                _ => {}
            }
        }

        Ok(summary)
    }

    /// Set event workflow state
    pub async fn set_status(&self, id: i64, status: EventStatus) -> Result<Event, ClubHubError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, title, description, club_id, location_id, status, created_by, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(status.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Day entries that occupy slots at a location on a date.
    ///
    /// Only approved/ongoing/completed events block; conflict identity is the
    /// location id, never the display name.
    pub async fn find_blocking_days(&self, location_id: i64, day: NaiveDate, exclude_event: Option<i64>) -> Result<Vec<EventDay>, ClubHubError> {
        let days = sqlx::query_as::<_, EventDay>(
            r#"
            SELECT d.id, d.event_id, d.day, d.start_time, d.end_time
            FROM event_days d
            INNER JOIN events e ON e.id = d.event_id
            WHERE e.location_id = $1
              AND d.day = $2
              AND e.status IN ('approved', 'ongoing', 'completed')
              AND ($3::BIGINT IS NULL OR e.id <> $3)
            ORDER BY d.start_time ASC
            "#
        )
        .bind(location_id)
        .bind(day)
        .bind(exclude_event)
        .fetch_all(&self.pool)
        .await?;

        Ok(days)
    }
}
