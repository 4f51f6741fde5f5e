//! Hearthwood Core - Shared types library.
//!
//! This crate provides the domain vocabulary used by the storefront state layer:
//! - `storefront` - Client-side stores (cart, auth, catalog, language)
//! - `integration-tests` - Cross-store scenarios
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no async
//! runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails, ratings, categories
//!   and locales

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
