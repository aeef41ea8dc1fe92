//! Member repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::user::{User, CreateUserRequest, UpdateUserRequest};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new member
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, ClubHubError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (student_no, full_name, email, major_id, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, student_no, full_name, email, major_id, role, is_active, created_at, updated_at
            "#
        )
        .bind(request.student_no)
        .bind(request.full_name)
        .bind(request.email)
        .bind(request.major_id)
        .bind(request.role.unwrap_or_else(|| "member".to_string()))
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find member by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, ClubHubError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, student_no, full_name, email, major_id, role, is_active, created_at, updated_at FROM users WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find member by student number
    pub async fn find_by_student_no(&self, student_no: &str) -> Result<Option<User>, ClubHubError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, student_no, full_name, email, major_id, role, is_active, created_at, updated_at FROM users WHERE student_no = $1"
        )
        .bind(student_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update member
    pub async fn update(&self, id: i64, request: UpdateUserRequest) -> Result<User, ClubHubError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET full_name = COALESCE($2, full_name),
                email = COALESCE($3, email),
                major_id = COALESCE($4, major_id),
                role = COALESCE($5, role),
                is_active = COALESCE($6, is_active),
                updated_at = $7
            WHERE id = $1
            RETURNING id, student_no, full_name, email, major_id, role, is_active, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(request.full_name)
        .bind(request.email)
        .bind(request.major_id)
        .bind(request.role)
        .bind(request.is_active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// List members with pagination
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, ClubHubError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, student_no, full_name, email, major_id, role, is_active, created_at, updated_at FROM users ORDER BY id ASC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Search members by name pattern
    pub async fn find_by_name_pattern(&self, pattern: &str) -> Result<Vec<User>, ClubHubError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, student_no, full_name, email, major_id, role, is_active, created_at, updated_at FROM users WHERE full_name ILIKE $1 ORDER BY full_name ASC LIMIT 50"
        )
        .bind(format!("%{}%", pattern))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Count total members
    pub async fn count(&self) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Count members on a major
    pub async fn count_by_major(&self, major_id: i64) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE major_id = $1")
            .bind(major_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
