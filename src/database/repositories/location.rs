//! Location repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::location::{Location, CreateLocationRequest, UpdateLocationRequest};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Clone)]
pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateLocationRequest) -> Result<Location, ClubHubError> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (name, capacity, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, capacity, is_active, created_at, updated_at
            "#
        )
        .bind(request.name)
        .bind(request.capacity)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(location)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Location>, ClubHubError> {
        let location = sqlx::query_as::<_, Location>(
            "SELECT id, name, capacity, is_active, created_at, updated_at FROM locations WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    pub async fn update(&self, id: i64, request: UpdateLocationRequest) -> Result<Location, ClubHubError> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            UPDATE locations
            SET name = COALESCE($2, name),
                capacity = COALESCE($3, capacity),
                is_active = COALESCE($4, is_active),
                updated_at = $5
            WHERE id = $1
            RETURNING id, name, capacity, is_active, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(request.name)
        .bind(request.capacity)
        .bind(request.is_active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(location)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClubHubError> {
        sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List active locations
    pub async fn list_active(&self) -> Result<Vec<Location>, ClubHubError> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT id, name, capacity, is_active, created_at, updated_at FROM locations WHERE is_active = true ORDER BY name ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    /// List all locations with pagination
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Location>, ClubHubError> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT id, name, capacity, is_active, created_at, updated_at FROM locations ORDER BY name ASC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    pub async fn count(&self) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM locations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
