//! Account screen workflow.

use std::sync::Arc;

use crate::error::Result;
use crate::i18n::keys;
use crate::models::User;
use crate::notice::Notice;
use crate::services::forms::{LoginForm, RegisterForm};
use crate::stores::{AuthStore, LanguageStore};

/// Validates account forms and hands them to the auth store.
#[derive(Debug, Clone)]
pub struct AccountService {
    auth: Arc<AuthStore>,
    language: Arc<LanguageStore>,
}

impl AccountService {
    #[must_use]
    pub const fn new(auth: Arc<AuthStore>, language: Arc<LanguageStore>) -> Self {
        Self { auth, language }
    }

    /// Submit the login form.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if a field fails a local check; the
    /// auth store is not touched in that case.
    /// Returns `AppError::Auth` if the credentials are rejected.
    pub async fn login(&self, form: &LoginForm) -> Result<User> {
        self.auth.clear_error();
        form.validate()?;
        Ok(self.auth.login(&form.email, &form.password).await?)
    }

    /// Submit the registration form.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if a field fails a local check.
    /// Returns `AppError::Auth` if the email is malformed or already taken.
    pub async fn register(&self, form: &RegisterForm) -> Result<User> {
        self.auth.clear_error();
        form.validate()?;
        Ok(self
            .auth
            .register(&form.email, &form.password, &form.name)
            .await?)
    }

    /// End the session.
    #[must_use]
    pub fn logout(&self) -> Notice {
        self.auth.logout();
        Notice::info(keys::LOGGED_OUT, &self.language)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use hearthwood_core::{Locale, NoticeKind};

    use super::*;
    use crate::error::AppError;
    use crate::mock::{DEMO_EMAIL, DEMO_PASSWORD, MockData};
    use crate::services::ValidationError;
    use crate::storage::{MemoryStorage, Storage};
    use crate::stores::AuthError;

    fn service() -> (AccountService, Arc<AuthStore>) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let language = Arc::new(LanguageStore::hydrate(Arc::clone(&storage), Locale::En));
        let auth = Arc::new(AuthStore::hydrate(
            storage,
            Arc::new(MockData::load().unwrap()),
            Arc::clone(&language),
            Duration::ZERO,
        ));
        (AccountService::new(Arc::clone(&auth), language), auth)
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_store() {
        let (account, auth) = service();
        let err = account
            .login(&LoginForm::new("", DEMO_PASSWORD))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::EmailRequired)
        ));
        assert_eq!(auth.state().error, None);
        assert!(!auth.state().is_loading);
    }

    #[tokio::test]
    async fn test_submit_clears_stale_error() {
        let (account, auth) = service();
        let err = account
            .login(&LoginForm::new(DEMO_EMAIL, "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::InvalidCredentials)));
        assert!(auth.state().error.is_some());

        let _ = account.login(&LoginForm::new(DEMO_EMAIL, "")).await;
        assert_eq!(auth.state().error, None);
    }

    #[tokio::test]
    async fn test_register_then_logout() {
        let (account, auth) = service();
        let form = RegisterForm::new("Jane", "jane@example.com", "secret", "secret");
        let user = account.register(&form).await.unwrap();
        assert_eq!(user.name, "Jane");
        assert!(auth.is_authenticated());

        let notice = account.logout();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.message, "You have been logged out");
        assert!(!auth.is_authenticated());
    }
}
