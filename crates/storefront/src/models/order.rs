//! Order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hearthwood_core::{OrderId, OrderStatus, Price, ProductId, UserId};

/// One product/quantity pair on a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A placed order as shown in the account's order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub total: Price,
    pub status: OrderStatus,
}

impl Order {
    /// Total number of units across all items.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
