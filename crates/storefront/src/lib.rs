//! Hearthwood Storefront library.
//!
//! Client-side state for a furniture storefront: observable stores for the
//! cart, the auth session, the product list and the interface language,
//! catalog filtering and sorting, and mocked login, registration and
//! checkout. Sessions, carts and the chosen language are persisted through a
//! key-value [`storage::Storage`] so they survive a restart.
//!
//! [`state::AppState`] wires everything together.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod mock;
pub mod models;
pub mod notice;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;
