//! Penalty rule and record repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::penalty::{PenaltyRule, PenaltyRecord, CreatePenaltyRuleRequest, UpdatePenaltyRuleRequest, IssuePenaltyRequest};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Clone)]
pub struct PenaltyRepository {
    pool: PgPool,
}

impl PenaltyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new penalty rule
    pub async fn create_rule(&self, request: CreatePenaltyRuleRequest) -> Result<PenaltyRule, ClubHubError> {
        let rule = sqlx::query_as::<_, PenaltyRule>(
            r#"
            INSERT INTO penalty_rules (name, description, points_deduction, score_deduction, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, points_deduction, score_deduction, is_active, created_at, updated_at
            "#
        )
        .bind(request.name)
        .bind(request.description)
        .bind(request.points_deduction)
        .bind(request.score_deduction)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(rule)
    }

    /// Find rule by ID
    pub async fn find_rule(&self, id: i64) -> Result<Option<PenaltyRule>, ClubHubError> {
        let rule = sqlx::query_as::<_, PenaltyRule>(
            "SELECT id, name, description, points_deduction, score_deduction, is_active, created_at, updated_at FROM penalty_rules WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rule)
    }

    /// Update rule
    pub async fn update_rule(&self, id: i64, request: UpdatePenaltyRuleRequest) -> Result<PenaltyRule, ClubHubError> {
        let rule = sqlx::query_as::<_, PenaltyRule>(
            r#"
            UPDATE penalty_rules
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                points_deduction = COALESCE($4, points_deduction),
                score_deduction = COALESCE($5, score_deduction),
                is_active = COALESCE($6, is_active),
                updated_at = $7
            WHERE id = $1
            RETURNING id, name, description, points_deduction, score_deduction, is_active, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(request.name)
        .bind(request.description)
        .bind(request.points_deduction)
        .bind(request.score_deduction)
        .bind(request.is_active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(rule)
    }

    /// List rules; inactive rules stay listed for the audit trail
    pub async fn list_rules(&self, limit: i64, offset: i64) -> Result<Vec<PenaltyRule>, ClubHubError> {
        let rules = sqlx::query_as::<_, PenaltyRule>(
            "SELECT id, name, description, points_deduction, score_deduction, is_active, created_at, updated_at FROM penalty_rules ORDER BY name ASC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rules)
    }

    /// Count rules
    pub async fn count_rules(&self) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM penalty_rules")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Delete a rule; callers must first ensure no records reference it
    pub async fn delete_rule(&self, id: i64) -> Result<(), ClubHubError> {
        sqlx::query("DELETE FROM penalty_rules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Count records issued under a rule
    pub async fn count_records_for_rule(&self, rule_id: i64) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM penalty_records WHERE rule_id = $1")
            .bind(rule_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Record an issued penalty
    pub async fn create_record(&self, request: IssuePenaltyRequest) -> Result<PenaltyRecord, ClubHubError> {
        let record = sqlx::query_as::<_, PenaltyRecord>(
            r#"
            INSERT INTO penalty_records (rule_id, user_id, club_id, issued_by, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, rule_id, user_id, club_id, issued_by, note, created_at
            "#
        )
        .bind(request.rule_id)
        .bind(request.user_id)
        .bind(request.club_id)
        .bind(request.issued_by)
        .bind(request.note)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// List penalties issued to a member
    pub async fn records_for_user(&self, user_id: i64, limit: i64, offset: i64) -> Result<Vec<PenaltyRecord>, ClubHubError> {
        let records = sqlx::query_as::<_, PenaltyRecord>(
            "SELECT id, rule_id, user_id, club_id, issued_by, note, created_at FROM penalty_records WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// List penalties recorded against a club
    pub async fn records_for_club(&self, club_id: i64, limit: i64, offset: i64) -> Result<Vec<PenaltyRecord>, ClubHubError> {
        let records = sqlx::query_as::<_, PenaltyRecord>(
            "SELECT id, rule_id, user_id, club_id, issued_by, note, created_at FROM penalty_records WHERE club_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        )
        .bind(club_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Total score deduction accumulated by a club's penalty records
    pub async fn score_deduction_for_club(&self, club_id: i64) -> Result<i64, ClubHubError> {
        let total: (Option<i64>,) = sqlx::query_as(
            r#"
            SELECT SUM(r.score_deduction)::BIGINT
            FROM penalty_records p
            INNER JOIN penalty_rules r ON r.id = p.rule_id
            WHERE p.club_id = $1
            "#
        )
        .bind(club_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total.0.unwrap_or(0))
    }
}
