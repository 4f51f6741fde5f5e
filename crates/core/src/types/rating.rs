//! Product rating on a 0-5 scale.

use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum RatingError {
    /// The value is outside `0.0..=5.0` or not a number.
    #[error("rating must be between 0 and 5 (got {0})")]
    OutOfRange(f32),
}

/// A star rating between 0 and 5 inclusive.
///
/// Ratings are totally ordered (NaN is rejected at construction), so they can
/// be used directly as sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(f32);

impl Rating {
    /// Highest possible rating.
    pub const MAX: f32 = 5.0;

    /// Lowest possible rating, also the "no minimum" filter value.
    pub const ZERO: Self = Self(0.0);

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::OutOfRange` when `value` is NaN or outside 0-5.
    pub fn new(value: f32) -> Result<Self, RatingError> {
        if (0.0..=Self::MAX).contains(&value) {
            // `-0.0` is in range; store it as `0.0` so equality agrees with `Ord`.
            Ok(Self(value.abs()))
        } else {
            Err(RatingError::OutOfRange(value))
        }
    }

    /// The raw value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Eq for Rating {}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f32> for Rating {
    type Error = RatingError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
