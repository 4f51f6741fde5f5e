//! Unified error handling with Sentry integration.
//!
//! Every fallible storefront operation returns a concern-specific error;
//! `AppError` gathers them so screen-level code can turn any failure into a
//! localized [`Notice`].

use thiserror::Error;

use hearthwood_core::NoticeKind;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::i18n::keys;
use crate::mock::MockDataError;
use crate::notice::Notice;
use crate::services::{CheckoutError, ValidationError};
use crate::storage::StorageError;
use crate::stores::{AuthError, LanguageStore};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A form field failed a local check.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout was refused.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Catalog source failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Persistence backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Static mock data failed validation.
    #[error("Mock data error: {0}")]
    MockData(#[from] MockDataError),
}

impl AppError {
    /// Translation key of the message shown to the user.
    ///
    /// Infrastructure failures share one generic message.
    #[must_use]
    pub const fn translation_key(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.translation_key(),
            Self::Auth(err) => err.translation_key(),
            Self::Checkout(err) => err.translation_key(),
            Self::Catalog(_) | Self::Storage(_) | Self::Config(_) | Self::MockData(_) => {
                keys::SOMETHING_WENT_WRONG
            }
        }
    }

    /// How the notice for this error is styled.
    #[must_use]
    pub const fn notice_kind(&self) -> NoticeKind {
        match self {
            Self::Checkout(CheckoutError::LoginRequired) => NoticeKind::Info,
            _ => NoticeKind::Error,
        }
    }

    /// Whether this error points at a defect rather than user input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Catalog(_) | Self::Storage(_) | Self::Config(_) | Self::MockData(_)
        )
    }

    /// Localized notice for this error. Internal errors are captured to
    /// Sentry first.
    #[must_use]
    pub fn notice(&self, language: &LanguageStore) -> Notice {
        if self.is_internal() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Storefront error"
            );
        }
        Notice::localized(self.notice_kind(), self.translation_key(), language)
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for a user action.
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("product_id", "3")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
