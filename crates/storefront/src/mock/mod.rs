//! In-memory mock data source.
//!
//! Stands in for a backend: a fixed catalog of twelve products, one demo
//! account and that account's order history. Everything is built once at
//! startup from static seeds and is read-only afterwards.

mod products;
mod users;

pub use users::{DEMO_EMAIL, DEMO_PASSWORD};

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

use hearthwood_core::{CurrencyCode, Email, OrderId, Price, ProductId, Rating, UserId};

use crate::catalog::Catalog;
use crate::models::{Order, OrderItem, Product, User};

/// A static seed failed validation while building the mock data.
#[derive(Debug, Error)]
pub enum MockDataError {
    #[error("product {id}: {reason}")]
    InvalidProduct { id: &'static str, reason: String },
    #[error("user {id}: {reason}")]
    InvalidUser { id: &'static str, reason: String },
    #[error("order {id}: {reason}")]
    InvalidOrder { id: &'static str, reason: String },
}

/// Read-only mock backend.
#[derive(Debug, Clone)]
pub struct MockData {
    catalog: Catalog,
    users: Vec<User>,
    orders: Vec<Order>,
}

impl MockData {
    /// Build the mock data set from the static seeds.
    ///
    /// # Errors
    ///
    /// Returns `MockDataError` if a seed carries an invalid image URL, rating,
    /// email, price or date.
    pub fn load() -> Result<Self, MockDataError> {
        let products = products::PRODUCTS
            .iter()
            .map(product_from_seed)
            .collect::<Result<Vec<_>, _>>()?;
        let users = users::USERS
            .iter()
            .map(user_from_seed)
            .collect::<Result<Vec<_>, _>>()?;
        let orders = users::ORDERS
            .iter()
            .map(order_from_seed)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            products = products.len(),
            users = users.len(),
            orders = orders.len(),
            "Mock data loaded"
        );

        Ok(Self {
            catalog: Catalog::new(products),
            users,
            orders,
        })
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All mock accounts.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up an account by exact email.
    #[must_use]
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email.as_str() == email)
    }

    /// Historical orders placed before this session.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

fn product_from_seed(seed: &products::ProductSeed) -> Result<Product, MockDataError> {
    let invalid = |reason: String| MockDataError::InvalidProduct {
        id: seed.id,
        reason,
    };

    let price = Price::usd(seed.price);
    let original_price = seed.original_price.map(Price::usd);
    if price.amount <= Decimal::ZERO {
        return Err(invalid(format!("price must be positive (got {price})")));
    }
    if let Some(original) = original_price.filter(|original| *original <= price) {
        return Err(invalid(format!(
            "original price {original} must exceed price {price}"
        )));
    }

    Ok(Product {
        id: ProductId::new(seed.id),
        name: seed.name.to_owned(),
        price,
        original_price,
        category: seed.category,
        rating: Rating::new(seed.rating).map_err(|e| invalid(e.to_string()))?,
        image_url: Url::parse(seed.image_url).map_err(|e| invalid(e.to_string()))?,
        purchase_count: seed.purchase_count,
        description: seed.description.to_owned(),
        in_stock: seed.in_stock,
    })
}

fn user_from_seed(seed: &users::UserSeed) -> Result<User, MockDataError> {
    let email = Email::parse(seed.email).map_err(|e| MockDataError::InvalidUser {
        id: seed.id,
        reason: e.to_string(),
    })?;
    Ok(User::new(seed.id, email, seed.name))
}

fn order_from_seed(seed: &users::OrderSeed) -> Result<Order, MockDataError> {
    let (year, month, day) = seed.placed_on;
    let placed_at: DateTime<Utc> = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| MockDataError::InvalidOrder {
            id: seed.id,
            reason: format!("invalid date {year}-{month}-{day}"),
        })?;

    Ok(Order {
        id: OrderId::new(seed.id),
        user_id: UserId::new(seed.user_id),
        placed_at,
        items: seed
            .items
            .iter()
            .map(|&(product_id, quantity)| OrderItem {
                product_id: ProductId::new(product_id),
                quantity,
            })
            .collect(),
        total: Price::new(Decimal::from(seed.total), CurrencyCode::USD),
        status: seed.status,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hearthwood_core::{Category, OrderStatus};

    use super::*;

    #[test]
    fn test_load_builds_full_catalog() {
        let data = MockData::load().unwrap();
        assert_eq!(data.catalog().len(), 12);

        let chair = data.catalog().get(&ProductId::new("3")).unwrap();
        assert_eq!(chair.name, "Ergonomic Office Chair");
        assert_eq!(chair.category, Category::Chairs);
        assert_eq!(chair.purchase_count, 215);
        assert_eq!(chair.discount_percent(), Some(19));
    }

    #[test]
    fn test_product_ids_are_unique() {
        let data = MockData::load().unwrap();
        let mut ids: Vec<_> = data.catalog().products().iter().map(|p| &p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_demo_account() {
        let data = MockData::load().unwrap();
        let user = data.user_by_email(DEMO_EMAIL).unwrap();
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.id.as_str(), "1");
        assert!(data.user_by_email("nobody@example.com").is_none());
    }

    #[test]
    fn test_seeded_orders() {
        let data = MockData::load().unwrap();
        let orders = data.orders();
        assert_eq!(orders.len(), 2);

        let first = orders.first().unwrap();
        assert_eq!(first.status, OrderStatus::Delivered);
        assert_eq!(first.unit_count(), 3);
        assert_eq!(first.total, Price::usd(847));
        assert_eq!(first.placed_at.date_naive().to_string(), "2023-06-15");
    }
}
