//! Authentication store.
//!
//! Mocked password authentication against the static user set. Sessions
//! move anonymous → authenticated → anonymous; the current user survives a
//! restart through the `auth-storage` snapshot.
//!
//! Login and register simulate a network round trip. Overlapping attempts
//! are serialized: a second call waits for the first to resolve, then runs,
//! and its outcome is the one left in the store.

mod error;

pub use error::AuthError;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, watch};
use tracing::instrument;

use hearthwood_core::Email;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::mock::{DEMO_EMAIL, DEMO_PASSWORD, MockData};
use crate::models::User;
use crate::storage::{SnapshotSlot, Storage, keys};
use crate::stores::LanguageStore;

/// Session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// The signed-in user, if any.
    pub user: Option<User>,
    /// A login or register attempt is in progress.
    pub is_loading: bool,
    /// Localized message of the last failed attempt.
    pub error: Option<String>,
}

impl AuthState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// A session transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// An attempt started: clear the previous error, raise the loading flag.
    Started,
    /// The attempt authenticated `User`.
    Succeeded(User),
    /// The attempt failed with this localized message.
    Failed(String),
    LoggedOut,
    ErrorCleared,
}

impl AuthState {
    /// Apply `action`, returning the resulting state.
    #[must_use]
    pub fn reduce(&self, action: &AuthAction) -> Self {
        let mut next = self.clone();
        match action {
            AuthAction::Started => {
                next.is_loading = true;
                next.error = None;
            }
            AuthAction::Succeeded(user) => {
                next.user = Some(user.clone());
                next.is_loading = false;
                next.error = None;
            }
            AuthAction::Failed(message) => {
                next.is_loading = false;
                next.error = Some(message.clone());
            }
            AuthAction::LoggedOut => {
                next.user = None;
                next.error = None;
            }
            AuthAction::ErrorCleared => next.error = None,
        }
        next
    }

    fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated(),
        }
    }
}

/// Persisted part of the session. Loading and error flags are transient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthSnapshot {
    user: Option<User>,
    is_authenticated: bool,
}

/// Auth store: runs login/register/logout and persists the session.
#[derive(Debug)]
pub struct AuthStore {
    state: watch::Sender<AuthState>,
    slot: SnapshotSlot<AuthSnapshot>,
    mock: Arc<MockData>,
    language: Arc<LanguageStore>,
    latency: Duration,
    in_flight: Mutex<()>,
}

impl AuthStore {
    /// Restore the persisted session, if any.
    #[must_use]
    pub fn hydrate(
        storage: Arc<dyn Storage>,
        mock: Arc<MockData>,
        language: Arc<LanguageStore>,
        latency: Duration,
    ) -> Self {
        let slot = SnapshotSlot::new(storage, keys::AUTH);
        let user = slot
            .load()
            .filter(|snapshot: &AuthSnapshot| snapshot.is_authenticated)
            .and_then(|snapshot| snapshot.user);

        if let Some(user) = &user {
            set_sentry_user(&user.id, Some(user.email.as_str()));
            tracing::info!(user_id = %user.id, "Session restored");
        }

        Self {
            state: watch::Sender::new(AuthState {
                user,
                ..AuthState::default()
            }),
            slot,
            mock,
            language,
            latency,
            in_flight: Mutex::new(()),
        }
    }

    /// Apply `action`; persist when the signed-in user changed.
    fn dispatch(&self, action: &AuthAction) {
        let mut persisted = None;
        self.state.send_if_modified(|state| {
            let next = state.reduce(action);
            if next == *state {
                return false;
            }
            if next.user != state.user {
                persisted = Some(next.snapshot());
            }
            *state = next;
            true
        });

        if let Some(snapshot) = persisted {
            self.slot.save(&snapshot);
        }
    }

    /// Record the outcome of an attempt.
    fn finish(&self, result: Result<User, AuthError>) -> Result<User, AuthError> {
        match &result {
            Ok(user) => {
                set_sentry_user(&user.id, Some(user.email.as_str()));
                self.dispatch(&AuthAction::Succeeded(user.clone()));
                tracing::info!(user_id = %user.id, "Signed in");
            }
            Err(e) => {
                let message = self.language.t(e.translation_key()).to_owned();
                self.dispatch(&AuthAction::Failed(message));
                tracing::warn!(error = %e, "Authentication failed");
            }
        }
        result
    }

    // =========================================================================
    // Password Authentication
    // =========================================================================

    /// Sign in with email and password.
    ///
    /// Only the demo account accepts a password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<User, AuthError> {
        let _guard = self.in_flight.lock().await;
        self.dispatch(&AuthAction::Started);
        tokio::time::sleep(self.latency).await;

        let result = if email == DEMO_EMAIL && password.expose_secret() == DEMO_PASSWORD {
            self.mock
                .user_by_email(email)
                .cloned()
                .ok_or(AuthError::InvalidCredentials)
        } else {
            Err(AuthError::InvalidCredentials)
        };
        self.finish(result)
    }

    /// Create an account and sign in with it.
    ///
    /// Any password is accepted. Email and name are stored as typed. The
    /// account lives only in this session's store; it is not added to the
    /// mock user set, so it cannot log in again after logout.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailInUse` if the email belongs to a mock account.
    #[instrument(skip(self, _password))]
    pub async fn register(
        &self,
        email: &str,
        _password: &SecretString,
        name: &str,
    ) -> Result<User, AuthError> {
        let _guard = self.in_flight.lock().await;
        self.dispatch(&AuthAction::Started);
        tokio::time::sleep(self.latency).await;

        let result = if self.mock.user_by_email(email).is_some() {
            Err(AuthError::EmailInUse)
        } else {
            let id = format!("user-{}", Utc::now().timestamp_millis());
            Ok(User::new(id, Email::verbatim(email), name))
        };
        self.finish(result)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// End the session.
    pub fn logout(&self) {
        let user_id = self.state.borrow().user.as_ref().map(|user| user.id.clone());
        self.dispatch(&AuthAction::LoggedOut);
        clear_sentry_user();
        if let Some(user_id) = user_id {
            tracing::info!(%user_id, "Signed out");
        }
    }

    /// Dismiss the last error message.
    pub fn clear_error(&self) {
        self.dispatch(&AuthAction::ErrorCleared);
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Receive session changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hearthwood_core::Locale;

    use super::*;
    use crate::storage::MemoryStorage;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s)
    }

    fn store_with(storage: &MemoryStorage, latency: Duration) -> AuthStore {
        let storage: Arc<dyn Storage> = Arc::new(storage.clone());
        let language = Arc::new(LanguageStore::hydrate(Arc::clone(&storage), Locale::En));
        AuthStore::hydrate(
            storage,
            Arc::new(MockData::load().unwrap()),
            language,
            latency,
        )
    }

    fn store() -> (AuthStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        (store_with(&storage, Duration::ZERO), storage)
    }

    #[tokio::test]
    async fn test_demo_login() {
        let (auth, _) = store();
        let user = auth
            .login(DEMO_EMAIL, &secret(DEMO_PASSWORD))
            .await
            .unwrap();

        assert_eq!(user.name, "John Doe");
        let state = auth.state();
        assert!(state.is_authenticated());
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_wrong_password_sets_localized_error() {
        let (auth, _) = store();
        let err = auth
            .login(DEMO_EMAIL, &secret("hunter2"))
            .await
            .unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        let state = auth.state();
        assert!(!state.is_authenticated());
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
    }

    #[tokio::test]
    async fn test_error_follows_active_locale() {
        let storage = MemoryStorage::new();
        let shared: Arc<dyn Storage> = Arc::new(storage.clone());
        let language = Arc::new(LanguageStore::hydrate(Arc::clone(&shared), Locale::Ru));
        let auth = AuthStore::hydrate(
            shared,
            Arc::new(MockData::load().unwrap()),
            Arc::clone(&language),
            Duration::ZERO,
        );

        let _ = auth.register(DEMO_EMAIL, &secret("x"), "Jane").await;
        assert_eq!(
            auth.state().error.as_deref(),
            Some("Email уже используется")
        );
    }

    #[tokio::test]
    async fn test_next_attempt_clears_previous_error() {
        let (auth, _) = store();
        let _ = auth.login("nobody@example.com", &secret("x")).await;
        assert!(auth.state().error.is_some());

        auth.login(DEMO_EMAIL, &secret(DEMO_PASSWORD)).await.unwrap();
        assert_eq!(auth.state().error, None);
    }

    #[tokio::test]
    async fn test_register_creates_session_user() {
        let (auth, _) = store();
        let user = auth
            .register("new@example.com", &secret("pw"), "Jane")
            .await
            .unwrap();

        assert!(user.id.as_str().starts_with("user-"));
        assert_eq!(user.email.as_str(), "new@example.com");
        assert_eq!(auth.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_register_rejects_existing_email() {
        let (auth, _) = store();
        assert_eq!(
            auth.register(DEMO_EMAIL, &secret("pw"), "Jane").await,
            Err(AuthError::EmailInUse)
        );
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_keeps_input_as_typed() {
        let (auth, _) = store();
        let user = auth.register("jane", &secret("pw"), " Jane ").await.unwrap();
        assert_eq!(user.email.as_str(), "jane");
        assert_eq!(user.name, " Jane ");

        // Only an exact match counts as taken.
        let padded = format!(" {DEMO_EMAIL}");
        let user = auth.register(&padded, &secret("pw"), "Jane").await.unwrap();
        assert_eq!(user.email.as_str(), padded);
        assert_eq!(auth.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_logout_and_clear_error() {
        let (auth, _) = store();
        auth.login(DEMO_EMAIL, &secret(DEMO_PASSWORD)).await.unwrap();
        auth.logout();
        assert!(!auth.is_authenticated());

        let _ = auth.login(DEMO_EMAIL, &secret("nope")).await;
        auth.clear_error();
        assert_eq!(auth.state(), AuthState::default());
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let (auth, storage) = store();
        auth.login(DEMO_EMAIL, &secret(DEMO_PASSWORD)).await.unwrap();

        let restored = store_with(&storage, Duration::ZERO);
        assert_eq!(restored.current_user(), auth.current_user());

        restored.logout();
        let after_logout = store_with(&storage, Duration::ZERO);
        assert!(!after_logout.is_authenticated());
    }

    #[tokio::test]
    async fn test_snapshot_format() {
        let (auth, storage) = store();
        auth.login(DEMO_EMAIL, &secret(DEMO_PASSWORD)).await.unwrap();

        let raw = storage.load(keys::AUTH).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["isAuthenticated"], true);
        assert_eq!(value["state"]["user"]["name"], "John Doe");
    }

    #[tokio::test]
    async fn test_overlapping_attempts_are_serialized() {
        let storage = MemoryStorage::new();
        let auth = store_with(&storage, Duration::from_millis(10));

        let (wrong, right) = (secret("wrong"), secret(DEMO_PASSWORD));
        let (first, second) = tokio::join!(
            auth.login(DEMO_EMAIL, &wrong),
            auth.login(DEMO_EMAIL, &right),
        );

        assert!(first.is_err());
        assert!(second.is_ok());
        let state = auth.state();
        assert!(state.is_authenticated());
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_loading_flag_is_raised_during_attempt() {
        let storage = MemoryStorage::new();
        let auth = store_with(&storage, Duration::from_millis(20));
        let mut rx = auth.subscribe();

        let password = secret(DEMO_PASSWORD);
        let login = auth.login(DEMO_EMAIL, &password);
        let observe = async {
            rx.changed().await.unwrap();
            rx.borrow_and_update().is_loading
        };
        let (result, was_loading) = tokio::join!(login, observe);

        assert!(result.is_ok());
        assert!(was_loading);
    }
}
