//! Product screen add-to-cart workflow.

use std::num::NonZeroU32;
use std::sync::Arc;

use crate::i18n::keys;
use crate::models::Product;
use crate::notice::Notice;
use crate::stores::{CartStore, LanguageStore};

#[derive(Debug, Clone)]
pub struct CartService {
    cart: Arc<CartStore>,
    language: Arc<LanguageStore>,
}

impl CartService {
    #[must_use]
    pub const fn new(cart: Arc<CartStore>, language: Arc<LanguageStore>) -> Self {
        Self { cart, language }
    }

    /// Add `quantity` units of `product` and confirm it.
    #[must_use]
    pub fn add(&self, product: &Product, quantity: NonZeroU32) -> Notice {
        self.cart.add_to_cart(product, quantity);
        Notice::success(keys::ADDED_TO_CART, &self.language)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hearthwood_core::{Locale, NoticeKind, ProductId};

    use super::*;
    use crate::mock::MockData;
    use crate::storage::{MemoryStorage, Storage};

    #[test]
    fn test_add_confirms_in_active_locale() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let mock = MockData::load().unwrap();
        let catalog = Arc::new(mock.catalog().clone());
        let language = Arc::new(LanguageStore::hydrate(Arc::clone(&storage), Locale::Ru));
        let cart = Arc::new(CartStore::hydrate(storage, Arc::clone(&catalog)));
        let service = CartService::new(Arc::clone(&cart), language);

        let sofa = catalog.get(&ProductId::new("1")).unwrap();
        let notice = service.add(sofa, NonZeroU32::new(2).unwrap());

        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, crate::i18n::translate_or_key(Locale::Ru, "addedToCart"));
        assert_eq!(cart.item_count(), 2);
    }
}
