//! Domain models for the storefront.
//!
//! These types are shared by the mock data source, the stores and the
//! persisted snapshots.

pub mod order;
pub mod product;
pub mod user;

pub use order::{Order, OrderItem};
pub use product::Product;
pub use user::User;
