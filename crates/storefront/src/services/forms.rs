//! Account screen form validation.
//!
//! Runs before anything reaches the auth store. Checks run in a fixed order
//! and the first failure is reported.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::i18n::keys;

/// A form field failed a local check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email is required")]
    EmailRequired,
    #[error("password is required")]
    PasswordRequired,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("name is required")]
    NameRequired,
}

impl ValidationError {
    /// Translation key of the message shown to the user.
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::EmailRequired => keys::PLEASE_ENTER_EMAIL,
            Self::PasswordRequired => keys::PLEASE_ENTER_PASSWORD,
            Self::PasswordMismatch => keys::PASSWORDS_NOT_MATCH,
            Self::NameRequired => keys::PLEASE_ENTER_NAME,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Check that both fields are filled in.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_credentials(&self.email, &self.password)
    }
}

#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl RegisterForm {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
            confirm_password: SecretString::from(confirm_password.into()),
        }
    }

    /// Check email, password, confirmation and name, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_credentials(&self.email, &self.password)?;
        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        Ok(())
    }
}

fn check_credentials(email: &str, password: &SecretString) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if password.expose_secret().trim().is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}
