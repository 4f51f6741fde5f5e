//! User domain types.

use serde::{Deserialize, Serialize};

use hearthwood_core::{Email, UserId};

/// A storefront account.
///
/// Only identity and display data; credentials never leave the auth store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Email address, unique within the mock user set.
    pub email: Email,
    /// Display name shown on the account screen.
    pub name: String,
}

impl User {
    /// Create a new user record.
    #[must_use]
    pub fn new(id: impl Into<UserId>, email: Email, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email,
            name: name.into(),
        }
    }
}
