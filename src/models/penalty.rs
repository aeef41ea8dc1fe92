//! Penalty rule and record models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PenaltyRule {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub points_deduction: i64,
    pub score_deduction: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PenaltyRecord {
    pub id: i64,
    pub rule_id: i64,
    pub user_id: i64,
    pub club_id: Option<i64>,
    pub issued_by: Option<i64>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePenaltyRuleRequest {
    pub name: String,
    pub description: Option<String>,
    pub points_deduction: i64,
    pub score_deduction: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePenaltyRuleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub points_deduction: Option<i64>,
    pub score_deduction: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuePenaltyRequest {
    pub rule_id: i64,
    pub user_id: i64,
    pub club_id: Option<i64>,
    pub issued_by: Option<i64>,
    pub note: Option<String>,
}
