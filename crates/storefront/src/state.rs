//! Composition root: stores and services wired together.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogQuery, FilterCriteria, HomeSections};
use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::mock::MockData;
use crate::services::{AccountService, CartService, CheckoutService};
use crate::storage::{JsonFileStorage, Storage};
use crate::stores::{AuthStore, CartStore, LanguageStore, OrderHistory, ProductStore};

/// Application state shared across screens.
///
/// This struct is cheaply cloneable via `Arc`. Every store is hydrated from
/// the given storage when the state is built, so rebuilding over the same
/// storage restores the previous session.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    mock: Arc<MockData>,
    catalog: Arc<Catalog>,
    language: Arc<LanguageStore>,
    auth: Arc<AuthStore>,
    cart: Arc<CartStore>,
    products: ProductStore,
    account: AccountService,
    shopping: CartService,
    checkout: CheckoutService,
}

impl AppState {
    /// Build the application state over `storage`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::MockData` if the static seeds fail validation.
    pub fn new(config: StorefrontConfig, storage: Arc<dyn Storage>) -> Result<Self, AppError> {
        let mock = Arc::new(MockData::load()?);
        let catalog = Arc::new(mock.catalog().clone());
        let latencies = config.latencies;

        let language = Arc::new(LanguageStore::hydrate(
            Arc::clone(&storage),
            config.default_locale,
        ));
        let auth = Arc::new(AuthStore::hydrate(
            Arc::clone(&storage),
            Arc::clone(&mock),
            Arc::clone(&language),
            latencies.auth,
        ));
        let cart = Arc::new(CartStore::hydrate(storage, Arc::clone(&catalog)));
        let orders = Arc::new(OrderHistory::new(mock.orders().to_vec()));
        let source: Arc<Catalog> = Arc::clone(&catalog);
        let products = ProductStore::new(source, latencies.catalog);

        let account = AccountService::new(Arc::clone(&auth), Arc::clone(&language));
        let shopping = CartService::new(Arc::clone(&cart), Arc::clone(&language));
        let checkout = CheckoutService::new(
            Arc::clone(&auth),
            Arc::clone(&cart),
            orders,
            Arc::clone(&language),
            latencies.checkout,
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                mock,
                catalog,
                language,
                auth,
                cart,
                products,
                account,
                shopping,
                checkout,
            }),
        })
    }

    /// Build the application state over the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the data directory cannot be created.
    /// Returns `AppError::MockData` if the static seeds fail validation.
    pub fn from_config(config: StorefrontConfig) -> Result<Self, AppError> {
        let storage = JsonFileStorage::open(&config.data_dir)?;
        Self::new(config, Arc::new(storage))
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The static mock backend.
    #[must_use]
    pub fn mock(&self) -> &MockData {
        &self.inner.mock
    }

    /// The indexed product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn language(&self) -> &LanguageStore {
        &self.inner.language
    }

    #[must_use]
    pub fn auth(&self) -> &AuthStore {
        &self.inner.auth
    }

    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    #[must_use]
    pub fn account(&self) -> &AccountService {
        &self.inner.account
    }

    /// Add-to-cart with confirmation.
    #[must_use]
    pub fn shopping(&self) -> &CartService {
        &self.inner.shopping
    }

    #[must_use]
    pub fn checkout(&self) -> &CheckoutService {
        &self.inner.checkout
    }

    /// A fresh catalog query using the configured price ceiling.
    #[must_use]
    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery {
            filters: FilterCriteria::new(self.inner.config.max_price),
            ..CatalogQuery::default()
        }
    }

    /// Load products and promotions into the product store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if either fetch fails.
    pub async fn refresh_catalog(&self) -> Result<(), AppError> {
        self.products().fetch_products().await?;
        self.products().fetch_promotions().await?;
        Ok(())
    }

    /// Run `f` over the home-screen sections built from the product store.
    pub fn with_home_sections<R>(&self, f: impl FnOnce(&HomeSections<'_>) -> R) -> R {
        let state = self.products().state();
        let sections = HomeSections::build(&state.products, &state.promotions);
        f(&sections)
    }
}
