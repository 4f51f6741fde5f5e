//! Product catalog and listing derivation.
//!
//! [`Catalog`] is the indexed, read-only product set. [`CatalogQuery`] turns
//! it into the displayed list: search, then filter, then a stable sort.
//! Nothing here is memoized; callers re-run the derivation whenever the
//! product list, search string, criteria or sort order change.

mod filter;
mod sort;

pub use filter::{FilterCriteria, PriceRange};
pub use sort::SortOrder;

use std::collections::HashMap;

use thiserror::Error;

use hearthwood_core::{Price, ProductId};

use crate::models::Product;

/// Number of products shown per home-screen section.
pub const HOME_SECTION_SIZE: usize = 4;

/// Errors from a catalog source.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The source could not produce the product list.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Where the product store copies its data from.
pub trait CatalogSource: Send + Sync {
    /// Every product in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source cannot be read.
    fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Products carrying an original price.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source cannot be read.
    fn fetch_promotions(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Indexed product set.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Index `products`. A later duplicate ID shadows an earlier one in
    /// lookups.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();
        Self { products, index }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index
            .get(id)
            .and_then(|&position| self.products.get(position))
    }

    /// Current price of a product.
    #[must_use]
    pub fn price_of(&self, id: &ProductId) -> Option<Price> {
        self.get(id).map(|product| product.price)
    }

    /// Products on promotion, in catalog order.
    pub fn promotions(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.is_on_sale())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogSource for Catalog {
    fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    fn fetch_promotions(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.promotions().cloned().collect())
    }
}

/// Inputs of the catalog screen's listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Free-text search; empty matches everything.
    pub search: String,
    pub filters: FilterCriteria,
    pub sort: SortOrder,
}

impl CatalogQuery {
    /// Whether `product` matches the search string: a case-insensitive
    /// substring of its name or category label.
    #[must_use]
    pub fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.category.label().to_lowercase().contains(&needle)
    }

    /// Derive the displayed list from `products`.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut listing: Vec<&Product> = products
            .iter()
            .filter(|product| self.matches_search(product) && self.filters.matches(product))
            .collect();
        self.sort.sort(&mut listing);
        listing
    }

    /// Clear search, filters and sort back to their defaults, keeping the
    /// price slider ceiling.
    pub fn clear(&mut self) {
        self.search.clear();
        self.filters.reset();
        self.sort = SortOrder::default();
    }
}

/// Home-screen sections.
#[derive(Debug, Clone, Default)]
pub struct HomeSections<'a> {
    pub promotions: Vec<&'a Product>,
    pub popular: Vec<&'a Product>,
    pub top_rated: Vec<&'a Product>,
}

impl<'a> HomeSections<'a> {
    /// Build the sections from the product store's lists.
    #[must_use]
    pub fn build(products: &'a [Product], promotions: &'a [Product]) -> Self {
        let top = |order: SortOrder| {
            let mut ranked: Vec<&Product> = products.iter().collect();
            order.sort(&mut ranked);
            ranked.truncate(HOME_SECTION_SIZE);
            ranked
        };

        Self {
            promotions: promotions.iter().collect(),
            popular: top(SortOrder::Popularity),
            top_rated: top(SortOrder::Rating),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use hearthwood_core::{Category, Rating};

    use super::*;
    use crate::mock::MockData;

    fn catalog() -> Catalog {
        MockData::load().unwrap().catalog().clone()
    }

    fn ids(listing: &[&Product]) -> Vec<String> {
        listing.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_chairs_up_to_400() {
        let catalog = catalog();
        let query = CatalogQuery {
            filters: FilterCriteria::default()
                .with_categories([Category::Chairs])
                .with_price_range(Decimal::ZERO, Decimal::from(400)),
            ..CatalogQuery::default()
        };

        let listing = query.apply(catalog.products());
        assert_eq!(ids(&listing), ["3"]);
    }

    #[test]
    fn test_popularity_puts_215_first() {
        let catalog = catalog();
        let listing = CatalogQuery::default().apply(catalog.products());

        assert_eq!(listing.len(), 12);
        assert_eq!(listing.first().unwrap().purchase_count, 215);
    }

    #[test]
    fn test_search_matches_name_and_category_case_insensitively() {
        let catalog = catalog();
        let mut query = CatalogQuery {
            search: "TABLE".to_owned(),
            sort: SortOrder::PriceAsc,
            ..CatalogQuery::default()
        };
        // "Glass Coffee Table" (249) and "Scandinavian Dining Table" (849)
        assert_eq!(ids(&query.apply(catalog.products())), ["7", "2"]);

        query.search = "lighting".to_owned();
        assert_eq!(ids(&query.apply(catalog.products())), ["9"]);

        query.search = "hammock".to_owned();
        assert!(query.apply(catalog.products()).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = catalog();
        let query = CatalogQuery {
            filters: FilterCriteria::default().with_price_range(Decimal::from(249), Decimal::from(299)),
            sort: SortOrder::PriceDesc,
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&query.apply(catalog.products())), ["5", "7"]);
    }

    #[test]
    fn test_min_rating_and_rating_sort() {
        let catalog = catalog();
        let query = CatalogQuery {
            filters: FilterCriteria::default().with_min_rating(Rating::new(4.7).unwrap()),
            sort: SortOrder::Rating,
            ..CatalogQuery::default()
        };
        // 4.8 sofa, then the two 4.7 items in catalog order (stable sort)
        assert_eq!(ids(&query.apply(catalog.products())), ["1", "3", "10"]);
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut query = CatalogQuery {
            search: "sofa".to_owned(),
            filters: FilterCriteria::default().with_categories([Category::Sofas]),
            sort: SortOrder::PriceDesc,
        };
        query.clear();
        assert_eq!(query, CatalogQuery::default());
    }

    #[test]
    fn test_home_sections() {
        let catalog = catalog();
        let products = catalog.fetch_products().unwrap();
        let promotions = catalog.fetch_promotions().unwrap();
        let home = HomeSections::build(&products, &promotions);

        assert_eq!(home.promotions.len(), 6);
        assert!(home.promotions.iter().all(|p| p.is_on_sale()));
        assert_eq!(ids(&home.popular), ["3", "9", "1", "12"]);
        assert_eq!(ids(&home.top_rated), ["1", "3", "10", "2"]);
    }

    #[test]
    fn test_price_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.price_of(&ProductId::new("12")), Some(Price::usd(179)));
        assert_eq!(catalog.price_of(&ProductId::new("99")), None);
    }
}
