//! Shopping cart store.
//!
//! The cart is a list of lines, one per distinct product, in the order the
//! products were first added. Lines carry only the product ID and quantity;
//! prices are looked up in the [`Catalog`] whenever a total is computed, so
//! totals always reflect current prices.
//!
//! Decrementing a line never removes it: quantity clamps at 1 and only
//! [`CartStore::remove_from_cart`] (or [`CartStore::clear_cart`]) deletes it.

use std::num::NonZeroU32;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::instrument;

use hearthwood_core::{Price, ProductId};

use crate::catalog::Catalog;
use crate::error::add_breadcrumb;
use crate::models::Product;
use crate::storage::{SnapshotSlot, Storage, keys};

/// One product and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: NonZeroU32,
}

/// A cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add `quantity` units, creating the line if needed.
    Add {
        product_id: ProductId,
        quantity: NonZeroU32,
    },
    /// One more unit of an existing line.
    Increase(ProductId),
    /// One less unit of an existing line, never below 1.
    Decrease(ProductId),
    /// Drop the line.
    Remove(ProductId),
    /// Drop every line.
    Clear,
}

/// Cart contents. Also the persisted snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    #[serde(rename = "items")]
    lines: Vec<CartLine>,
}

impl CartState {
    /// Apply `action`, returning the resulting state.
    ///
    /// Actions naming a product without a line are no-ops (except `Add`).
    /// Quantities saturate at `u32::MAX`.
    #[must_use]
    pub fn reduce(&self, action: &CartAction) -> Self {
        let mut next = self.clone();
        match action {
            CartAction::Add {
                product_id,
                quantity,
            } => match next.line_mut(product_id) {
                Some(line) => line.quantity = line.quantity.saturating_add(quantity.get()),
                None => next.lines.push(CartLine {
                    product_id: product_id.clone(),
                    quantity: *quantity,
                }),
            },
            CartAction::Increase(product_id) => {
                if let Some(line) = next.line_mut(product_id) {
                    line.quantity = line.quantity.saturating_add(1);
                }
            }
            CartAction::Decrease(product_id) => {
                if let Some(line) = next.line_mut(product_id) {
                    line.quantity = NonZeroU32::new(line.quantity.get() - 1).unwrap_or(line.quantity);
                }
            }
            CartAction::Remove(product_id) => {
                next.lines.retain(|line| &line.product_id != product_id);
            }
            CartAction::Clear => next.lines.clear(),
        }
        next
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines (the cart badge).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Sum of current price times quantity. Lines whose product is missing
    /// from `catalog` contribute nothing.
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> Price {
        self.lines
            .iter()
            .filter_map(|line| {
                catalog
                    .price_of(&line.product_id)
                    .map(|price| price * line.quantity.get())
            })
            .sum()
    }

    /// Rebuild a loaded snapshot: drop lines whose product is not in
    /// `catalog` and fold repeated products into their first line.
    fn normalize(self, catalog: &Catalog) -> Self {
        let loaded = self.lines.len();
        let (known, unknown): (Vec<_>, Vec<_>) = self
            .lines
            .into_iter()
            .partition(|line| catalog.get(&line.product_id).is_some());
        if !unknown.is_empty() {
            tracing::warn!(
                dropped = unknown.len(),
                "Dropped cart lines for unknown products"
            );
        }

        let state = known.into_iter().fold(Self::default(), |state, line| {
            state.reduce(&CartAction::Add {
                product_id: line.product_id,
                quantity: line.quantity,
            })
        });
        let merged = loaded - unknown.len() - state.lines.len();
        if merged > 0 {
            tracing::warn!(merged, "Merged duplicate cart lines");
        }
        state
    }
}

/// Cart store: applies [`CartAction`]s and persists the result.
#[derive(Debug)]
pub struct CartStore {
    state: watch::Sender<CartState>,
    catalog: Arc<Catalog>,
    slot: SnapshotSlot<CartState>,
}

impl CartStore {
    /// Restore the persisted cart, dropping lines for products that are no
    /// longer in the catalog and merging lines that repeat a product.
    #[must_use]
    pub fn hydrate(storage: Arc<dyn Storage>, catalog: Arc<Catalog>) -> Self {
        let slot = SnapshotSlot::new(storage, keys::CART);
        let state = slot
            .load()
            .map(|state: CartState| state.normalize(&catalog))
            .unwrap_or_default();
        tracing::debug!(lines = state.lines().len(), "Cart store hydrated");

        Self {
            state: watch::Sender::new(state),
            catalog,
            slot,
        }
    }

    /// Apply `action`; persist and notify subscribers if anything changed.
    fn dispatch(&self, action: &CartAction) {
        let changed = self.state.send_if_modified(|state| {
            let next = state.reduce(action);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });

        if changed {
            let snapshot = self.state.borrow().clone();
            self.slot.save(&snapshot);
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// Stock is not checked: `in_stock` is advisory.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&self, product: &Product, quantity: NonZeroU32) {
        self.dispatch(&CartAction::Add {
            product_id: product.id.clone(),
            quantity,
        });
        add_breadcrumb(
            "cart",
            "Added to cart",
            Some(&[
                ("product_id", product.id.as_str()),
                ("quantity", &quantity.to_string()),
            ]),
        );
        tracing::info!(quantity = quantity.get(), "Added to cart");
    }

    /// Add a single unit of `product`.
    pub fn add_one(&self, product: &Product) {
        self.add_to_cart(product, NonZeroU32::MIN);
    }

    pub fn increase_quantity(&self, product_id: &ProductId) {
        self.dispatch(&CartAction::Increase(product_id.clone()));
    }

    /// Decrement; a no-op when the line is already at 1.
    pub fn decrease_quantity(&self, product_id: &ProductId) {
        self.dispatch(&CartAction::Decrease(product_id.clone()));
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    pub fn remove_from_cart(&self, product_id: &ProductId) {
        self.dispatch(&CartAction::Remove(product_id.clone()));
        add_breadcrumb(
            "cart",
            "Removed from cart",
            Some(&[("product_id", product_id.as_str())]),
        );
    }

    pub fn clear_cart(&self) {
        self.dispatch(&CartAction::Clear);
        tracing::info!("Cart cleared");
    }

    /// Current cart contents.
    #[must_use]
    pub fn snapshot(&self) -> CartState {
        self.state.borrow().clone()
    }

    /// Total at current catalog prices.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.state.borrow().total(&self.catalog)
    }

    /// Number of units in the cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.state.borrow().item_count()
    }

    /// Receive cart changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::mock::MockData;
    use crate::storage::MemoryStorage;

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn catalog() -> Arc<Catalog> {
        Arc::new(MockData::load().unwrap().catalog().clone())
    }

    fn product(catalog: &Catalog, id: &str) -> Product {
        catalog.get(&ProductId::new(id)).cloned().unwrap()
    }

    fn store() -> (CartStore, Arc<Catalog>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let catalog = catalog();
        let store = CartStore::hydrate(Arc::new(storage.clone()), Arc::clone(&catalog));
        (store, catalog, storage)
    }

    #[test]
    fn test_item_count_sums_distinct_adds() {
        let (cart, catalog, _) = store();
        cart.add_to_cart(&product(&catalog, "1"), qty(2));
        cart.add_to_cart(&product(&catalog, "3"), qty(1));
        cart.add_to_cart(&product(&catalog, "7"), qty(4));

        assert_eq!(cart.item_count(), 7);
        assert_eq!(cart.snapshot().lines().len(), 3);
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let (cart, catalog, _) = store();
        let chair = product(&catalog, "3");
        cart.add_to_cart(&chair, qty(2));
        cart.add_to_cart(&chair, qty(3));

        let state = cart.snapshot();
        assert_eq!(state.lines().len(), 1);
        assert_eq!(state.line(&chair.id).unwrap().quantity.get(), 5);
    }

    #[test]
    fn test_decrease_clamps_at_one() {
        let (cart, catalog, _) = store();
        let lamp = product(&catalog, "9");
        cart.add_to_cart(&lamp, qty(2));

        cart.decrease_quantity(&lamp.id);
        cart.decrease_quantity(&lamp.id);
        cart.decrease_quantity(&lamp.id);

        let state = cart.snapshot();
        assert_eq!(state.line(&lamp.id).unwrap().quantity.get(), 1);
    }

    #[test]
    fn test_increase_and_unknown_line_are_handled() {
        let (cart, catalog, _) = store();
        let desk = product(&catalog, "10");
        cart.increase_quantity(&desk.id);
        assert!(cart.snapshot().is_empty());

        cart.add_one(&desk);
        cart.increase_quantity(&desk.id);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_excludes_quantity() {
        let (cart, catalog, _) = store();
        cart.add_to_cart(&product(&catalog, "2"), qty(2));
        cart.add_to_cart(&product(&catalog, "5"), qty(3));

        cart.remove_from_cart(&ProductId::new("2"));
        assert_eq!(cart.item_count(), 3);

        cart.remove_from_cart(&ProductId::new("2"));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_clear_zeroes_total() {
        let (cart, catalog, _) = store();
        cart.add_to_cart(&product(&catalog, "1"), qty(1));
        cart.add_to_cart(&product(&catalog, "8"), qty(2));
        assert_eq!(cart.cart_total(), Price::usd(1299 + 2 * 799));

        cart.clear_cart();
        assert!(cart.cart_total().is_zero());
        assert!(cart.snapshot().lines().is_empty());
    }

    #[test]
    fn test_total_uses_current_catalog_prices() {
        let catalog = catalog();
        let state = CartState::default().reduce(&CartAction::Add {
            product_id: ProductId::new("3"),
            quantity: qty(2),
        });
        assert_eq!(state.total(&catalog), Price::usd(698));

        let repriced: Vec<Product> = catalog
            .products()
            .iter()
            .cloned()
            .map(|mut p| {
                p.price.amount -= Decimal::from(49);
                p
            })
            .collect();
        assert_eq!(state.total(&Catalog::new(repriced)), Price::usd(600));
    }

    #[test]
    fn test_quantity_saturates() {
        let state = CartState::default().reduce(&CartAction::Add {
            product_id: ProductId::new("1"),
            quantity: NonZeroU32::MAX,
        });
        let state = state.reduce(&CartAction::Increase(ProductId::new("1")));
        assert_eq!(state.item_count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_cart_survives_restart() {
        let (cart, catalog, storage) = store();
        cart.add_to_cart(&product(&catalog, "4"), qty(2));
        cart.add_one(&product(&catalog, "12"));

        let restored = CartStore::hydrate(Arc::new(storage), catalog);
        assert_eq!(restored.snapshot(), cart.snapshot());
        assert_eq!(restored.cart_total(), Price::usd(2 * 899 + 179));
    }

    #[test]
    fn test_hydrate_drops_unknown_products() {
        let storage = MemoryStorage::new();
        storage
            .save(
                keys::CART,
                r#"{"state":{"items":[{"productId":"99","quantity":1},{"productId":"6","quantity":2}]},"version":0}"#,
            )
            .unwrap();

        let cart = CartStore::hydrate(Arc::new(storage), catalog());
        let state = cart.snapshot();
        assert_eq!(state.lines().len(), 1);
        assert_eq!(state.item_count(), 2);
    }

    #[test]
    fn test_hydrate_merges_repeated_products() {
        let storage = MemoryStorage::new();
        storage
            .save(
                keys::CART,
                r#"{"state":{"items":[{"productId":"6","quantity":1},{"productId":"3","quantity":1},{"productId":"6","quantity":2}]},"version":0}"#,
            )
            .unwrap();

        let cart = CartStore::hydrate(Arc::new(storage), catalog());
        let state = cart.snapshot();
        assert_eq!(state.lines().len(), 2);
        assert_eq!(state.lines()[0].product_id, ProductId::new("6"));
        assert_eq!(state.line(&ProductId::new("6")).unwrap().quantity.get(), 3);
        assert_eq!(state.item_count(), 4);
    }

    #[test]
    fn test_hydrate_merge_saturates() {
        let storage = MemoryStorage::new();
        let raw = format!(
            r#"{{"state":{{"items":[{{"productId":"6","quantity":{max}}},{{"productId":"6","quantity":5}}]}},"version":0}}"#,
            max = u32::MAX
        );
        storage.save(keys::CART, &raw).unwrap();

        let cart = CartStore::hydrate(Arc::new(storage), catalog());
        let state = cart.snapshot();
        assert_eq!(state.lines().len(), 1);
        assert_eq!(state.item_count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_zero_quantity_snapshot_is_rejected() {
        let storage = MemoryStorage::new();
        storage
            .save(
                keys::CART,
                r#"{"state":{"items":[{"productId":"6","quantity":0}]},"version":0}"#,
            )
            .unwrap();

        let cart = CartStore::hydrate(Arc::new(storage), catalog());
        assert!(cart.snapshot().is_empty());
    }

    #[test]
    fn test_no_op_actions_do_not_persist() {
        let (cart, _, storage) = store();
        cart.decrease_quantity(&ProductId::new("1"));
        cart.remove_from_cart(&ProductId::new("1"));
        cart.clear_cart();
        assert!(storage.is_empty());
    }
}
