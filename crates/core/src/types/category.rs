//! Furniture category tags.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown product category: {0}")]
pub struct CategoryError(pub String);

/// The fixed set of product categories sold by the store.
///
/// Serialized with its display label (`"Chairs"`), which is also what the
/// catalog search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Sofas,
    Chairs,
    Tables,
    Beds,
    Cabinets,
    Desks,
    Bookshelves,
    Wardrobes,
    Lighting,
    Decor,
}

impl Category {
    /// All categories in catalog display order.
    pub const ALL: [Self; 10] = [
        Self::Sofas,
        Self::Chairs,
        Self::Tables,
        Self::Beds,
        Self::Cabinets,
        Self::Desks,
        Self::Bookshelves,
        Self::Wardrobes,
        Self::Lighting,
        Self::Decor,
    ];

    /// Display label of the category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sofas => "Sofas",
            Self::Chairs => "Chairs",
            Self::Tables => "Tables",
            Self::Beds => "Beds",
            Self::Cabinets => "Cabinets",
            Self::Desks => "Desks",
            Self::Bookshelves => "Bookshelves",
            Self::Wardrobes => "Wardrobes",
            Self::Lighting => "Lighting",
            Self::Decor => "Decor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}
