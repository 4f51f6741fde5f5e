//! Product domain type.

use serde::{Deserialize, Serialize};
use url::Url;

use hearthwood_core::{Category, Price, ProductId, Rating};

/// A catalog product.
///
/// Products are immutable once loaded; the mock data source owns them for
/// the lifetime of the process and the stores hand out clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Current selling price.
    pub price: Price,
    /// Price before the promotion, always higher than `price` when present.
    pub original_price: Option<Price>,
    pub category: Category,
    pub rating: Rating,
    pub image_url: Url,
    /// Cumulative number of purchases, used for the popularity sort.
    pub purchase_count: u32,
    pub description: String,
    /// Advisory only: the cart never checks it.
    pub in_stock: bool,
}

impl Product {
    /// Whether the product is currently promoted (carries an original price).
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Discount badge value, e.g. `Some(15)` for "15% OFF".
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price
            .as_ref()
            .and_then(|original| self.price.discount_percent_from(original))
    }
}
