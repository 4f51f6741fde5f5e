//! Order history for the running session.
//!
//! Seeded with the historical mock orders. Orders placed at checkout are
//! appended in memory only and are gone after a restart.

use tokio::sync::watch;

use hearthwood_core::UserId;

use crate::models::Order;

#[derive(Debug)]
pub struct OrderHistory {
    orders: watch::Sender<Vec<Order>>,
}

impl OrderHistory {
    #[must_use]
    pub fn new(seed: Vec<Order>) -> Self {
        Self {
            orders: watch::Sender::new(seed),
        }
    }

    /// Record a newly placed order.
    pub fn append(&self, order: Order) {
        tracing::debug!(order_id = %order.id, user_id = %order.user_id, "Order recorded");
        self.orders.send_modify(|orders| orders.push(order));
    }

    /// Orders placed by `user_id`, newest first.
    #[must_use]
    pub fn orders_for(&self, user_id: &UserId) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .borrow()
            .iter()
            .filter(|order| &order.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders
    }
}
