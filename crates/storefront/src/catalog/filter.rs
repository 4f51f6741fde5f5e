//! Filter criteria for the catalog listing.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hearthwood_core::{Category, Rating};

use crate::models::Product;

/// Inclusive price bounds, always within `[0, max]` of the owning criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Whether `amount` lies within the bounds (both ends inclusive).
    ///
    /// A range whose `min` exceeds its `max` contains nothing.
    #[must_use]
    pub fn contains(&self, amount: Decimal) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Conjunctive product filter: price range, allowed categories and a
/// minimum rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    price_range: PriceRange,
    /// Empty means "any category".
    categories: BTreeSet<Category>,
    min_rating: Rating,
    /// Upper end of the price slider.
    max_price: Decimal,
}

impl FilterCriteria {
    /// Default slider ceiling.
    pub const DEFAULT_MAX_PRICE: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

    /// Unrestricted criteria for a slider that tops out at `max_price`.
    #[must_use]
    pub fn new(max_price: Decimal) -> Self {
        let max_price = max_price.max(Decimal::ZERO);
        Self {
            price_range: PriceRange {
                min: Decimal::ZERO,
                max: max_price,
            },
            categories: BTreeSet::new(),
            min_rating: Rating::ZERO,
            max_price,
        }
    }

    /// Set the price bounds, clamping each into `[0, max_price]`.
    #[must_use]
    pub fn with_price_range(mut self, min: Decimal, max: Decimal) -> Self {
        let clamp = |value: Decimal| value.clamp(Decimal::ZERO, self.max_price);
        self.price_range = PriceRange {
            min: clamp(min),
            max: clamp(max),
        };
        self
    }

    /// Restrict to the given categories (empty lifts the restriction).
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Require at least `rating`.
    #[must_use]
    pub const fn with_min_rating(mut self, rating: Rating) -> Self {
        self.min_rating = rating;
        self
    }

    /// Add the category if absent, remove it otherwise.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    /// Restore the unrestricted defaults, keeping the slider ceiling.
    pub fn reset(&mut self) {
        *self = Self::new(self.max_price);
    }

    #[must_use]
    pub const fn price_range(&self) -> PriceRange {
        self.price_range
    }

    #[must_use]
    pub const fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    #[must_use]
    pub const fn min_rating(&self) -> Rating {
        self.min_rating
    }

    #[must_use]
    pub const fn max_price(&self) -> Decimal {
        self.max_price
    }

    /// Whether a category or rating restriction is set (drives the filter
    /// badge; the price range alone does not count).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.categories.is_empty() || self.min_rating > Rating::ZERO
    }

    /// Whether `product` passes every criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.price_range.contains(product.price.amount)
            && (self.categories.is_empty() || self.categories.contains(&product.category))
            && product.rating >= self.min_rating
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PRICE)
    }
}
