//! Core types for Hearthwood.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod locale;
pub mod price;
pub mod rating;
pub mod status;

pub use category::{Category, CategoryError};
pub use email::{Email, EmailError};
pub use id::*;
pub use locale::{Locale, LocaleError};
pub use price::{CurrencyCode, Price};
pub use rating::{Rating, RatingError};
pub use status::*;
