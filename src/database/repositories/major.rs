//! Major repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::major::{Major, CreateMajorRequest, UpdateMajorRequest};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Clone)]
pub struct MajorRepository {
    pool: PgPool,
}

impl MajorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateMajorRequest) -> Result<Major, ClubHubError> {
        let major = sqlx::query_as::<_, Major>(
            r#"
            INSERT INTO majors (name, faculty, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, faculty, created_at, updated_at
            "#
        )
        .bind(request.name)
        .bind(request.faculty)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(major)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Major>, ClubHubError> {
        let major = sqlx::query_as::<_, Major>(
            "SELECT id, name, faculty, created_at, updated_at FROM majors WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(major)
    }

    pub async fn update(&self, id: i64, request: UpdateMajorRequest) -> Result<Major, ClubHubError> {
        let major = sqlx::query_as::<_, Major>(
            r#"
            UPDATE majors
            SET name = COALESCE($2, name),
                faculty = COALESCE($3, faculty),
                updated_at = $4
            WHERE id = $1
            RETURNING id, name, faculty, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(request.name)
        .bind(request.faculty)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(major)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClubHubError> {
        sqlx::query("DELETE FROM majors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Major>, ClubHubError> {
        let majors = sqlx::query_as::<_, Major>(
            "SELECT id, name, faculty, created_at, updated_at FROM majors ORDER BY name ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(majors)
    }
}
