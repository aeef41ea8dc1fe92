//! Point wallet models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Wallet {
    pub user_id: i64,
    pub balance: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PointTransaction {
    pub id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub kind: String,
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reasons points move in or out of a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Earn,
    Redemption,
    Refund,
    Penalty,
    Adjustment,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Earn => "earn",
            TransactionKind::Redemption => "redemption",
            TransactionKind::Refund => "refund",
            TransactionKind::Penalty => "penalty",
            TransactionKind::Adjustment => "adjustment",
        }
    }
}
