//! Mocked checkout.
//!
//! No payment is taken: checkout waits a fixed delay standing in for the
//! payment round trip, records a `Processing` order and empties the cart.
//! The lines and total are captured when checkout starts; anything added to
//! the cart during the delay is cleared with the rest.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use hearthwood_core::{OrderId, OrderStatus, UserId};

use crate::i18n::keys;
use crate::models::{Order, OrderItem};
use crate::notice::Notice;
use crate::stores::{AuthStore, CartStore, LanguageStore, OrderHistory};

/// Why checkout was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Nobody is signed in.
    #[error("login required")]
    LoginRequired,

    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,
}

impl CheckoutError {
    /// Translation key of the message shown to the user.
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::LoginRequired => keys::PLEASE_LOGIN,
            Self::EmptyCart => keys::YOUR_CART_IS_EMPTY,
        }
    }
}

/// A placed order and its confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub order: Order,
    pub notice: Notice,
}

#[derive(Debug, Clone)]
pub struct CheckoutService {
    auth: Arc<AuthStore>,
    cart: Arc<CartStore>,
    orders: Arc<OrderHistory>,
    language: Arc<LanguageStore>,
    latency: Duration,
}

impl CheckoutService {
    #[must_use]
    pub const fn new(
        auth: Arc<AuthStore>,
        cart: Arc<CartStore>,
        orders: Arc<OrderHistory>,
        language: Arc<LanguageStore>,
        latency: Duration,
    ) -> Self {
        Self {
            auth,
            cart,
            orders,
            language,
            latency,
        }
    }

    /// Place an order for the current cart.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::LoginRequired` if nobody is signed in.
    /// Returns `CheckoutError::EmptyCart` if the cart has no lines.
    /// The cart is untouched in both cases.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<Receipt, CheckoutError> {
        let user = self
            .auth
            .current_user()
            .ok_or(CheckoutError::LoginRequired)?;

        let cart = self.cart.snapshot();
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let total = self.cart.cart_total();
        let items: Vec<OrderItem> = cart
            .lines()
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id.clone(),
                quantity: line.quantity.get(),
            })
            .collect();

        tracing::info!(user_id = %user.id, total = %total, "Processing payment");
        tokio::time::sleep(self.latency).await;

        let order = Order {
            id: OrderId::new(Uuid::new_v4().to_string()),
            user_id: user.id,
            placed_at: Utc::now(),
            items,
            total,
            status: OrderStatus::Processing,
        };
        self.orders.append(order.clone());
        self.cart.clear_cart();
        tracing::info!(order_id = %order.id, "Order placed");

        Ok(Receipt {
            order,
            notice: Notice::success(keys::ORDER_PLACED_SUCCESS, &self.language),
        })
    }

    /// Orders placed by `user_id`, newest first.
    #[must_use]
    pub fn orders_for(&self, user_id: &UserId) -> Vec<Order> {
        self.orders.orders_for(user_id)
    }
}
