//! Static user accounts and their order history.

use hearthwood_core::OrderStatus;

/// Email of the single account that can sign in.
pub const DEMO_EMAIL: &str = "user@example.com";

/// Password of the demo account.
pub const DEMO_PASSWORD: &str = "password";

pub(super) struct UserSeed {
    pub id: &'static str,
    pub email: &'static str,
    pub name: &'static str,
}

pub(super) const USERS: [UserSeed; 1] = [UserSeed {
    id: "1",
    email: DEMO_EMAIL,
    name: "John Doe",
}];

pub(super) struct OrderSeed {
    pub id: &'static str,
    pub user_id: &'static str,
    /// Calendar date the order was placed (`year, month, day`).
    pub placed_on: (i32, u32, u32),
    /// `(product id, quantity)` pairs.
    pub items: &'static [(&'static str, u32)],
    pub total: i64,
    pub status: OrderStatus,
}

pub(super) const ORDERS: [OrderSeed; 2] = [
    OrderSeed {
        id: "order1",
        user_id: "1",
        placed_on: (2023, 6, 15),
        items: &[("3", 1), ("7", 2)],
        total: 847,
        status: OrderStatus::Delivered,
    },
    OrderSeed {
        id: "order2",
        user_id: "1",
        placed_on: (2023, 7, 22),
        items: &[("5", 1)],
        total: 299,
        status: OrderStatus::Processing,
    },
];
