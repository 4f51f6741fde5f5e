//! Authentication error types.

use thiserror::Error;

use crate::i18n::keys;

/// Errors that can occur during login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Wrong password or unknown account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("email already in use")]
    EmailInUse,
}

impl AuthError {
    /// Translation key of the message shown to the user.
    #[must_use]
    pub const fn translation_key(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => keys::INVALID_CREDENTIALS,
            Self::EmailInUse => keys::EMAIL_IN_USE,
        }
    }
}
