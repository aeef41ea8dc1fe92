//! Club and membership models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClubMember {
    pub id: i64,
    pub club_id: i64,
    pub user_id: i64,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClubRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberRequest {
    pub club_id: i64,
    pub user_id: i64,
    pub role: Option<String>,
}

/// Roles a member can hold within a club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClubRole {
    Member,
    Officer,
    President,
}

impl ClubRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubRole::Member => "member",
            ClubRole::Officer => "officer",
            ClubRole::President => "president",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "member" => Some(ClubRole::Member),
            "officer" => Some(ClubRole::Officer),
            "president" => Some(ClubRole::President),
            _ => None,
        }
    }
}
