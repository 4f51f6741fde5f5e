//! Sort orders for the catalog listing.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// How the listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    /// Most purchased first.
    #[default]
    Popularity,
    /// Highest rated first.
    Rating,
}

impl SortOrder {
    /// Every order, in the sort sheet's display order.
    pub const ALL: [Self; 4] = [Self::PriceAsc, Self::PriceDesc, Self::Popularity, Self::Rating];

    /// Translation key of the sort label.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::PriceAsc => "priceLowToHigh",
            Self::PriceDesc => "priceHighToLow",
            Self::Popularity => "popularity",
            Self::Rating => "rating",
        }
    }

    /// Comparator for this order. Equal keys compare `Equal`, so a stable sort
    /// keeps catalog order among ties.
    #[must_use]
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::PriceAsc => a.price.amount.cmp(&b.price.amount),
            Self::PriceDesc => b.price.amount.cmp(&a.price.amount),
            Self::Popularity => b.purchase_count.cmp(&a.purchase_count),
            Self::Rating => b.rating.cmp(&a.rating),
        }
    }

    /// Stable in-place sort.
    pub fn sort(&self, products: &mut [&Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}
