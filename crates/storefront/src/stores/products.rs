//! Product store: the catalog as observable state.
//!
//! Copies products and promotions out of a [`CatalogSource`] after a
//! simulated network delay. Each fetch fully replaces the held list.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::instrument;

use crate::catalog::{CatalogError, CatalogSource};
use crate::models::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductState {
    pub products: Vec<Product>,
    pub promotions: Vec<Product>,
    /// A fetch is in progress.
    pub is_loading: bool,
    /// Message of the last failed fetch.
    pub error: Option<String>,
}

pub struct ProductStore {
    state: watch::Sender<ProductState>,
    source: Arc<dyn CatalogSource>,
    latency: Duration,
}

impl std::fmt::Debug for ProductStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductStore")
            .field("state", &self.state)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl ProductStore {
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>, latency: Duration) -> Self {
        Self {
            state: watch::Sender::new(ProductState::default()),
            source,
            latency,
        }
    }

    /// Load the full product list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source fails; the message is also kept
    /// in the store's `error` field.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<usize, CatalogError> {
        self.begin();
        tokio::time::sleep(self.latency).await;

        let result = self.source.fetch_products();
        self.complete(result, |state, products| state.products = products)
    }

    /// Load the products currently on promotion.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source fails; the message is also kept
    /// in the store's `error` field.
    #[instrument(skip(self))]
    pub async fn fetch_promotions(&self) -> Result<usize, CatalogError> {
        self.begin();
        tokio::time::sleep(self.latency).await;

        let result = self.source.fetch_promotions();
        self.complete(result, |state, promotions| state.promotions = promotions)
    }

    fn begin(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
    }

    fn complete(
        &self,
        result: Result<Vec<Product>, CatalogError>,
        apply: impl FnOnce(&mut ProductState, Vec<Product>),
    ) -> Result<usize, CatalogError> {
        match result {
            Ok(products) => {
                let count = products.len();
                self.state.send_modify(|state| {
                    apply(state, products);
                    state.is_loading = false;
                });
                tracing::debug!(count, "Catalog fetched");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Catalog fetch failed");
                self.state.send_modify(|state| {
                    state.is_loading = false;
                    state.error = Some(e.to_string());
                });
                Err(e)
            }
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ProductState {
        self.state.borrow().clone()
    }

    /// Receive product list changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ProductState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::mock::MockData;

    struct Offline;

    impl CatalogSource for Offline {
        fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::Unavailable("offline".to_owned()))
        }

        fn fetch_promotions(&self) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::Unavailable("offline".to_owned()))
        }
    }

    fn catalog() -> Arc<Catalog> {
        Arc::new(MockData::load().unwrap().catalog().clone())
    }

    #[tokio::test]
    async fn test_fetch_copies_source() {
        let store = ProductStore::new(catalog(), Duration::ZERO);
        assert_eq!(store.fetch_products().await.unwrap(), 12);
        assert_eq!(store.fetch_promotions().await.unwrap(), 6);

        let state = store.state();
        assert_eq!(state.products.len(), 12);
        assert!(state.promotions.iter().all(Product::is_on_sale));
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_refetch_replaces_list() {
        let store = ProductStore::new(catalog(), Duration::ZERO);
        store.fetch_products().await.unwrap();
        store.fetch_products().await.unwrap();
        assert_eq!(store.state().products.len(), 12);
    }

    #[tokio::test]
    async fn test_failure_sets_error() {
        let store = ProductStore::new(Arc::new(Offline), Duration::ZERO);
        assert!(store.fetch_products().await.is_err());

        let state = store.state();
        assert!(!state.is_loading);
        assert!(state.products.is_empty());
        assert_eq!(state.error.as_deref(), Some("catalog unavailable: offline"));
    }

    #[tokio::test]
    async fn test_loading_flag_is_raised_during_fetch() {
        let store = ProductStore::new(catalog(), Duration::from_millis(20));
        let mut rx = store.subscribe();

        let observe = async {
            rx.changed().await.unwrap();
            rx.borrow_and_update().is_loading
        };
        let (fetched, was_loading) = tokio::join!(store.fetch_products(), observe);

        assert!(fetched.is_ok());
        assert!(was_loading);
    }
}
