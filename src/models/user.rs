//! Member model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub student_no: String,
    pub full_name: String,
    pub email: Option<String>,
    pub major_id: Option<i64>,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub student_no: String,
    pub full_name: String,
    pub email: Option<String>,
    pub major_id: Option<i64>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub major_id: Option<i64>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

/// Platform-level roles a member can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Member,
    Staff,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => "member",
            UserRole::Staff => "staff",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "member" => Some(UserRole::Member),
            "staff" => Some(UserRole::Staff),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}
