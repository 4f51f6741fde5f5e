//! Integration tests for the Hearthwood storefront.
//!
//! Scenarios run through [`AppState`] exactly as a client would, over
//! in-memory or on-disk storage. [`TestContext`] owns the storage so a test
//! can drop its state and rebuild it to simulate an app restart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hearthwood-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::num::NonZeroU32;
use std::sync::Arc;

use secrecy::SecretString;

use hearthwood_core::ProductId;
use hearthwood_storefront::config::StorefrontConfig;
use hearthwood_storefront::error::AppError;
use hearthwood_storefront::mock::{DEMO_EMAIL, DEMO_PASSWORD};
use hearthwood_storefront::models::{Product, User};
use hearthwood_storefront::state::AppState;
use hearthwood_storefront::storage::{JsonFileStorage, MemoryStorage, Storage};

/// Shared storage plus a way to (re)build app state over it.
pub struct TestContext {
    storage: Arc<dyn Storage>,
    config: StorefrontConfig,
    _dir: Option<tempfile::TempDir>,
}

impl TestContext {
    /// In-memory storage, no simulated delays.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            config: StorefrontConfig::instant(),
            _dir: None,
        }
    }

    /// JSON files in a fresh temporary directory, no simulated delays.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn on_disk() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let storage = JsonFileStorage::open(dir.path()).expect("open storage");
        Self {
            storage: Arc::new(storage),
            config: StorefrontConfig {
                data_dir: dir.path().to_path_buf(),
                ..StorefrontConfig::instant()
            },
            _dir: Some(dir),
        }
    }

    /// The underlying storage backend.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Build app state over this context's storage, as a fresh launch would.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the mock data fails to load.
    pub fn launch(&self) -> Result<AppState, AppError> {
        AppState::new(self.config.clone(), Arc::clone(&self.storage))
    }
}

/// Look up a catalog product by ID.
#[must_use]
pub fn product(state: &AppState, id: &str) -> Option<Product> {
    state.catalog().get(&ProductId::new(id)).cloned()
}

/// Add `quantity` units of product `id` to the cart. Unknown IDs and zero
/// quantities are ignored.
pub fn add(state: &AppState, id: &str, quantity: u32) {
    if let (Some(product), Some(quantity)) = (product(state, id), NonZeroU32::new(quantity)) {
        state.cart().add_to_cart(&product, quantity);
    }
}

/// Sign in with the demo account.
///
/// # Errors
///
/// Returns `AppError::Auth` if the login is rejected.
pub async fn sign_in(state: &AppState) -> Result<User, AppError> {
    Ok(state
        .auth()
        .login(DEMO_EMAIL, &SecretString::from(DEMO_PASSWORD))
        .await?)
}
