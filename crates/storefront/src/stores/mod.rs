//! Observable state containers.
//!
//! Each store keeps its state in a `tokio::sync::watch` channel, so readers
//! take cheap snapshots and UI layers can `subscribe()` to changes. All
//! mutation goes through a pure `reduce` on the state type; the store then
//! persists the new snapshot through its [`SnapshotSlot`](crate::storage::SnapshotSlot).
//!
//! Stores are owned by [`AppState`](crate::state::AppState) and shared by
//! `Arc`; there are no globals.

pub mod auth;
pub mod cart;
pub mod language;
pub mod orders;
pub mod products;

pub use auth::{AuthError, AuthState, AuthStore};
pub use cart::{CartAction, CartLine, CartState, CartStore};
pub use language::LanguageStore;
pub use orders::OrderHistory;
pub use products::{ProductState, ProductStore};
