//! Club repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::club::{Club, ClubMember, CreateClubRequest, UpdateClubRequest, AddMemberRequest};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Clone)]
pub struct ClubRepository {
    pool: PgPool,
}

impl ClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new club
    pub async fn create(&self, request: CreateClubRequest) -> Result<Club, ClubHubError> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            INSERT INTO clubs (name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, is_active, created_at, updated_at
            "#
        )
        .bind(request.name)
        .bind(request.description)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(club)
    }

    /// Find club by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Club>, ClubHubError> {
        let club = sqlx::query_as::<_, Club>(
            "SELECT id, name, description, is_active, created_at, updated_at FROM clubs WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(club)
    }

    /// Update club
    pub async fn update(&self, id: i64, request: UpdateClubRequest) -> Result<Club, ClubHubError> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            UPDATE clubs
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active),
                updated_at = $5
            WHERE id = $1
            RETURNING id, name, description, is_active, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(request.name)
        .bind(request.description)
        .bind(request.is_active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(club)
    }

    /// Delete club; memberships, events, and chat history cascade
    pub async fn delete(&self, id: i64) -> Result<(), ClubHubError> {
        sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List clubs with pagination
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Club>, ClubHubError> {
        let clubs = sqlx::query_as::<_, Club>(
            "SELECT id, name, description, is_active, created_at, updated_at FROM clubs ORDER BY name ASC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(clubs)
    }

    /// Count total clubs
    pub async fn count(&self) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clubs")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Add member to club
    pub async fn add_member(&self, request: AddMemberRequest) -> Result<ClubMember, ClubHubError> {
        let member = sqlx::query_as::<_, ClubMember>(
            r#"
            INSERT INTO club_members (club_id, user_id, role, joined_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, club_id, user_id, role, joined_at
            "#
        )
        .bind(request.club_id)
        .bind(request.user_id)
        .bind(request.role.unwrap_or_else(|| "member".to_string()))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(member)
    }

    /// Remove member from club
    pub async fn remove_member(&self, club_id: i64, user_id: i64) -> Result<(), ClubHubError> {
        sqlx::query("DELETE FROM club_members WHERE club_id = $1 AND user_id = $2")
            .bind(club_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Check if user is a member of club
    pub async fn is_member(&self, club_id: i64, user_id: i64) -> Result<bool, ClubHubError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM club_members WHERE club_id = $1 AND user_id = $2"
        )
        .bind(club_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0 > 0)
    }

    /// Get club roster
    pub async fn get_members(&self, club_id: i64, limit: i64, offset: i64) -> Result<Vec<ClubMember>, ClubHubError> {
        let members = sqlx::query_as::<_, ClubMember>(
            "SELECT id, club_id, user_id, role, joined_at FROM club_members WHERE club_id = $1 ORDER BY joined_at ASC LIMIT $2 OFFSET $3"
        )
        .bind(club_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Count club members
    pub async fn count_members(&self, club_id: i64) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM club_members WHERE club_id = $1")
            .bind(club_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Get clubs a user belongs to
    pub async fn get_user_clubs(&self, user_id: i64) -> Result<Vec<Club>, ClubHubError> {
        let clubs = sqlx::query_as::<_, Club>(
            r#"
            SELECT c.id, c.name, c.description, c.is_active, c.created_at, c.updated_at
            FROM clubs c
            INNER JOIN club_members cm ON c.id = cm.club_id
            WHERE cm.user_id = $1 AND c.is_active = true
            ORDER BY c.name ASC
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(clubs)
    }
}
