//! Wallet repository implementation
//!
//! Balance changes and their transaction log rows commit atomically.
//! A balance can never go below zero: `debit` refuses, `debit_saturating`
//! floors at zero and reports what was actually taken.

use sqlx::PgPool;
use chrono::Utc;
use crate::models::wallet::{Wallet, PointTransaction, TransactionKind};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Clone)]
pub struct WalletRepository {
    pool: PgPool,
}

impl WalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a wallet, creating an empty one on first touch
    pub async fn get_or_create(&self, user_id: i64) -> Result<Wallet, ClubHubError> {
        sqlx::query(
            "INSERT INTO wallets (user_id, balance, updated_at) VALUES ($1, 0, $2) ON CONFLICT (user_id) DO NOTHING"
        )
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let wallet = sqlx::query_as::<_, Wallet>(
            "SELECT user_id, balance, updated_at FROM wallets WHERE user_id = $1"
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(wallet)
    }

    /// Add points to a wallet
    pub async fn credit(&self, user_id: i64, amount: i64, kind: TransactionKind, reference: Option<&str>) -> Result<Wallet, ClubHubError> {
        if amount <= 0 {
            return Err(ClubHubError::InvalidInput("Credit amount must be positive".to_string()));
        }

        let mut tx = self.pool.begin().await?;

        let wallet = sqlx::query_as::<_, Wallet>(
            r#"
            INSERT INTO wallets (user_id, balance, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE
            SET balance = wallets.balance + $2, updated_at = $3
            RETURNING user_id, balance, updated_at
            "#
        )
        .bind(user_id)
        .bind(amount)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        self.record_transaction(&mut tx, user_id, amount, kind, reference).await?;

        tx.commit().await?;

        Ok(wallet)
    }

    /// Remove points from a wallet; fails if the balance is too low
    pub async fn debit(&self, user_id: i64, amount: i64, kind: TransactionKind, reference: Option<&str>) -> Result<Wallet, ClubHubError> {
        if amount <= 0 {
            return Err(ClubHubError::InvalidInput("Debit amount must be positive".to_string()));
        }

        let mut tx = self.pool.begin().await?;

        let current: Option<(i64,)> = sqlx::query_as(
            "SELECT balance FROM wallets WHERE user_id = $1 FOR UPDATE"
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let available = current.map(|(b,)| b).unwrap_or(0);
        if available < amount {
            return Err(ClubHubError::InsufficientPoints { required: amount, available });
        }

        let wallet = sqlx::query_as::<_, Wallet>(
            r#"
            UPDATE wallets
            SET balance = balance - $2, updated_at = $3
            WHERE user_id = $1
            RETURNING user_id, balance, updated_at
            "#
        )
        .bind(user_id)
        .bind(amount)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        self.record_transaction(&mut tx, user_id, -amount, kind, reference).await?;

        tx.commit().await?;

        Ok(wallet)
    }

    /// Remove up to `amount` points, flooring the balance at zero.
    /// Returns the wallet and the amount actually deducted.
    pub async fn debit_saturating(&self, user_id: i64, amount: i64, kind: TransactionKind, reference: Option<&str>) -> Result<(Wallet, i64), ClubHubError> {
        if amount <= 0 {
            return Err(ClubHubError::InvalidInput("Debit amount must be positive".to_string()));
        }

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO wallets (user_id, balance, updated_at) VALUES ($1, 0, $2) ON CONFLICT (user_id) DO NOTHING"
        )
        .bind(user_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let (available,): (i64,) = sqlx::query_as(
            "SELECT balance FROM wallets WHERE user_id = $1 FOR UPDATE"
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        let deducted = amount.min(available);

        let wallet = sqlx::query_as::<_, Wallet>(
            r#"
            UPDATE wallets
            SET balance = balance - $2, updated_at = $3
            WHERE user_id = $1
            RETURNING user_id, balance, updated_at
            "#
        )
        .bind(user_id)
        .bind(deducted)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        if deducted > 0 {
            self.record_transaction(&mut tx, user_id, -deducted, kind, reference).await?;
        }

        tx.commit().await?;

        Ok((wallet, deducted))
    }

    async fn record_transaction(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: i64,
        amount: i64,
        kind: TransactionKind,
        reference: Option<&str>,
    ) -> Result<(), ClubHubError> {
        sqlx::query(
            "INSERT INTO point_transactions (user_id, amount, kind, reference, created_at) VALUES ($1, $2, $3, $4, $5)"
        )
        .bind(user_id)
        .bind(amount)
        .bind(kind.as_str())
        .bind(reference)
        .bind(Utc::now())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Transaction history, newest first
    pub async fn history(&self, user_id: i64, limit: i64, offset: i64) -> Result<Vec<PointTransaction>, ClubHubError> {
        let transactions = sqlx::query_as::<_, PointTransaction>(
            "SELECT id, user_id, amount, kind, reference, created_at FROM point_transactions WHERE user_id = $1 ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    /// Count transactions for a user
    pub async fn count_history(&self, user_id: i64) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM point_transactions WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
