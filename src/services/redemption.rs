//! Redemption order service
//!
//! Members spend wallet points on items; the order debit is atomic and a
//! cancelled order refunds in full.

use tracing::info;
use crate::database::DatabaseService;
use crate::models::pagination::{Page, PageParams};
use crate::models::redemption::{RedemptionOrder, PlaceOrderRequest, OrderStatus};
use crate::utils::errors::{ClubHubError, Result};
use crate::utils::helpers;

/// Pickup codes are short enough to read out at the counter
const PICKUP_CODE_LEN: usize = 8;

#[derive(Clone)]
pub struct RedemptionService {
    db: DatabaseService,
}

impl RedemptionService {
    /// Create a new RedemptionService instance
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Place an order, debiting the member's wallet
    pub async fn place(&self, request: PlaceOrderRequest) -> Result<RedemptionOrder> {
        if request.item_name.trim().is_empty() {
            return Err(ClubHubError::InvalidInput("Item name is required".to_string()));
        }

        if request.points_cost <= 0 {
            return Err(ClubHubError::InvalidInput("Points cost must be positive".to_string()));
        }

        let user_id = request.user_id;
        if self.db.users.find_by_id(user_id).await?.is_none() {
            return Err(ClubHubError::UserNotFound { user_id });
        }

        let order_ref = helpers::generate_uuid();
        let pickup_code = helpers::generate_random_string(PICKUP_CODE_LEN);

        let order = self.db.redemptions.place(request, &order_ref, &pickup_code).await?;
        crate::utils::logging::log_wallet_movement(
            order.user_id,
            -order.points_cost,
            "redemption",
            Some(&order.order_ref),
        );

        Ok(order)
    }

    /// Fetch one order
    pub async fn get(&self, order_id: i64) -> Result<RedemptionOrder> {
        self.db.redemptions.find_by_id(order_id).await?
            .ok_or(ClubHubError::OrderNotFound { order_id })
    }

    /// List orders with optional status/user filters
    pub async fn list(&self, status: Option<String>, user_id: Option<i64>, params: PageParams) -> Result<Page<RedemptionOrder>> {
        if let Some(ref s) = status {
            if OrderStatus::parse(s).is_none() {
                return Err(ClubHubError::InvalidInput(format!("Unknown order status: {}", s)));
            }
        }

        let items = self.db.redemptions
            .list(status.as_deref(), user_id, params.limit(), params.offset())
            .await?;
        let total = self.db.redemptions.count(status.as_deref(), user_id).await?;

        Ok(Page::new(items, total, params))
    }

    /// Mark a placed order as picked up
    pub async fn complete(&self, order_id: i64) -> Result<RedemptionOrder> {
        let order = self.get(order_id).await?;
        self.check_transition(&order, OrderStatus::Completed)?;

        let order = self.db.redemptions.complete(order_id).await?;
        info!(order_id = order_id, "Redemption order completed");
        Ok(order)
    }

    /// Cancel a placed order and refund its points
    pub async fn cancel(&self, order_id: i64) -> Result<RedemptionOrder> {
        let order = self.get(order_id).await?;
        self.check_transition(&order, OrderStatus::Cancelled)?;

        let order = self.db.redemptions.cancel(order_id).await?;
        crate::utils::logging::log_wallet_movement(
            order.user_id,
            order.points_cost,
            "refund",
            Some(&order.order_ref),
        );

        Ok(order)
    }

    fn check_transition(&self, order: &RedemptionOrder, next: OrderStatus) -> Result<()> {
        let current = OrderStatus::parse(&order.status)
            .ok_or_else(|| ClubHubError::InvalidInput(format!("Corrupt order status: {}", order.status)))?;

        if !current.can_transition(next) {
            return Err(ClubHubError::InvalidStateTransition {
                from: current.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_transitions() {
        assert!(OrderStatus::Placed.can_transition(OrderStatus::Completed));
        assert!(OrderStatus::Placed.can_transition(OrderStatus::Cancelled));
        assert!(!OrderStatus::Completed.can_transition(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition(OrderStatus::Completed));
    }

    #[test]
    fn test_pickup_code_shape() {
        let code = helpers::generate_random_string(PICKUP_CODE_LEN);
        assert_eq!(code.len(), PICKUP_CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
