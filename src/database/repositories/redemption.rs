//! Redemption order repository implementation
//!
//! Placing an order debits the buyer's wallet and writes the order in a
//! single transaction; cancelling refunds the same way.

use sqlx::PgPool;
use chrono::Utc;
use crate::models::redemption::{RedemptionOrder, PlaceOrderRequest, OrderStatus};
use crate::models::wallet::TransactionKind;
use crate::utils::errors::ClubHubError;

#[derive(Debug, Clone)]
pub struct RedemptionRepository {
    pool: PgPool,
}

impl RedemptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Place an order, debiting the wallet atomically
    pub async fn place(&self, request: PlaceOrderRequest, order_ref: &str, pickup_code: &str) -> Result<RedemptionOrder, ClubHubError> {
        let mut tx = self.pool.begin().await?;

        let current: Option<(i64,)> = sqlx::query_as(
            "SELECT balance FROM wallets WHERE user_id = $1 FOR UPDATE"
        )
        .bind(request.user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let available = current.map(|(b,)| b).unwrap_or(0);
        if available < request.points_cost {
            return Err(ClubHubError::InsufficientPoints {
                required: request.points_cost,
                available,
            });
        }

        sqlx::query(
            "UPDATE wallets SET balance = balance - $2, updated_at = $3 WHERE user_id = $1"
        )
        .bind(request.user_id)
        .bind(request.points_cost)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO point_transactions (user_id, amount, kind, reference, created_at) VALUES ($1, $2, $3, $4, $5)"
        )
        .bind(request.user_id)
        .bind(-request.points_cost)
        .bind(TransactionKind::Redemption.as_str())
        .bind(order_ref)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let order = sqlx::query_as::<_, RedemptionOrder>(
            r#"
            INSERT INTO redemption_orders (order_ref, user_id, item_name, points_cost, status, pickup_code, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, order_ref, user_id, item_name, points_cost, status, pickup_code, created_at, updated_at
            "#
        )
        .bind(order_ref)
        .bind(request.user_id)
        .bind(request.item_name)
        .bind(request.points_cost)
        .bind(OrderStatus::Placed.as_str())
        .bind(pickup_code)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(order)
    }

    /// Find order by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<RedemptionOrder>, ClubHubError> {
        let order = sqlx::query_as::<_, RedemptionOrder>(
            "SELECT id, order_ref, user_id, item_name, points_cost, status, pickup_code, created_at, updated_at FROM redemption_orders WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Mark an order completed
    pub async fn complete(&self, id: i64) -> Result<RedemptionOrder, ClubHubError> {
        let order = sqlx::query_as::<_, RedemptionOrder>(
            r#"
            UPDATE redemption_orders
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, order_ref, user_id, item_name, points_cost, status, pickup_code, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(OrderStatus::Completed.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    /// Cancel an order and refund its points atomically
    pub async fn cancel(&self, id: i64) -> Result<RedemptionOrder, ClubHubError> {
        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, RedemptionOrder>(
            r#"
            UPDATE redemption_orders
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, order_ref, user_id, item_name, points_cost, status, pickup_code, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(OrderStatus::Cancelled.as_str())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO wallets (user_id, balance, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE
            SET balance = wallets.balance + $2, updated_at = $3
            "#
        )
        .bind(order.user_id)
        .bind(order.points_cost)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO point_transactions (user_id, amount, kind, reference, created_at) VALUES ($1, $2, $3, $4, $5)"
        )
        .bind(order.user_id)
        .bind(order.points_cost)
        .bind(TransactionKind::Refund.as_str())
        .bind(order.order_ref.as_str())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(order)
    }

    /// List orders, optionally filtered by status and user
    pub async fn list(&self, status: Option<&str>, user_id: Option<i64>, limit: i64, offset: i64) -> Result<Vec<RedemptionOrder>, ClubHubError> {
        let orders = sqlx::query_as::<_, RedemptionOrder>(
            r#"
            SELECT id, order_ref, user_id, item_name, points_cost, status, pickup_code, created_at, updated_at
            FROM redemption_orders
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::BIGINT IS NULL OR user_id = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#
        )
        .bind(status)
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Count orders matching the list filters
    pub async fn count(&self, status: Option<&str>, user_id: Option<i64>) -> Result<i64, ClubHubError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM redemption_orders
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::BIGINT IS NULL OR user_id = $2)
            "#
        )
        .bind(status)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
