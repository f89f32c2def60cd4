//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative or not finite.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// An integer fell outside its inclusive bounds.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
}

impl TypeConstraintError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveId(field)
            | Self::NegativeNumber(field)
            | Self::EmptyString(field)
            | Self::OutOfRange { field, .. } => *field,
        }
    }
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category_id"
);
id_newtype!(ProductId, "Unique identifier for a product.", "product_id");
id_newtype!(ReviewId, "Unique identifier for a review.", "review_id");

non_empty_string_newtype!(
    CategoryName,
    "Category name enforcing non-empty values.",
    "name"
);
non_empty_string_newtype!(
    ProductTitle,
    "Product title enforcing non-empty values.",
    "title"
);
non_empty_string_newtype!(ReviewText, "Review body enforcing non-empty values.", "text");

/// Non-negative price value in standard currency units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct ProductPrice(f64);

impl ProductPrice {
    /// Constructs a finite numeric value that is zero or greater.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("price"))
        }
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for ProductPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for ProductPrice {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductPrice> for f64 {
    fn from(value: ProductPrice) -> Self {
        value.0
    }
}

impl PartialEq<f64> for ProductPrice {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

/// Number of products associated with a category.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductCount(i64);

impl ProductCount {
    /// Constructs a count that must be zero or greater.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("products_count"))
        }
    }

    /// Returns the raw `i64` value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl PartialEq<i64> for ProductCount {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

/// Star rating attached to a review, in the inclusive range [1, 5].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ReviewStars(i32);

impl ReviewStars {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    /// Constructs a validated star value.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::OutOfRange {
                field: "stars",
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Returns the raw `i32` value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ReviewStars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ReviewStars {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReviewStars> for i32 {
    fn from(value: ReviewStars) -> Self {
        value.0
    }
}

impl PartialEq<i32> for ReviewStars {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

/// Average of review stars, rounded to two decimal places.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct ProductRating(f64);

impl ProductRating {
    /// Computes the mean of `stars`, or `None` when there are no reviews.
    ///
    /// Rounds to the second decimal place with ties going to the even digit.
    pub fn from_stars<I>(stars: I) -> Option<Self>
    where
        I: IntoIterator<Item = ReviewStars>,
    {
        let (sum, count) = stars
            .into_iter()
            .fold((0_i64, 0_i64), |(sum, count), s| {
                (sum + i64::from(s.get()), count + 1)
            });

        if count == 0 {
            return None;
        }

        let mean = sum as f64 / count as f64;
        Some(Self((mean * 100.0).round_ties_even() / 100.0))
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq<f64> for ProductRating {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stars(values: &[i32]) -> Vec<ReviewStars> {
        values.iter().map(|v| ReviewStars::new(*v).unwrap()).collect()
    }

    #[test]
    fn trims_non_empty_strings() {
        let value = CategoryName::new("  Tea  ").unwrap();
        assert_eq!(value.as_str(), "Tea");
    }

    #[test]
    fn rejects_blank_strings_with_field_name() {
        let err = ProductTitle::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("title"));
        assert_eq!(err.field(), "title");
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = ProductId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("product_id"));
    }

    #[test]
    fn product_price_allows_zero() {
        assert_eq!(ProductPrice::new(0.0).unwrap().get(), 0.0);
    }

    #[test]
    fn product_price_rejects_negative_and_nan() {
        assert_eq!(
            ProductPrice::new(-0.01).unwrap_err(),
            TypeConstraintError::NegativeNumber("price")
        );
        assert!(ProductPrice::new(f64::NAN).is_err());
    }

    #[test]
    fn review_stars_bounds() {
        assert!(ReviewStars::new(1).is_ok());
        assert!(ReviewStars::new(5).is_ok());
        assert_eq!(ReviewStars::new(6).unwrap_err().field(), "stars");
        assert!(ReviewStars::new(0).is_err());
    }

    #[test]
    fn rating_is_mean_of_stars() {
        assert_eq!(ProductRating::from_stars(stars(&[5, 4])).unwrap(), 4.5);
    }

    #[test]
    fn rating_rounds_to_two_decimals() {
        assert_eq!(ProductRating::from_stars(stars(&[5, 4, 4])).unwrap(), 4.33);
        assert_eq!(ProductRating::from_stars(stars(&[5, 5, 4])).unwrap(), 4.67);
    }

    #[test]
    fn rating_rounds_ties_to_even() {
        // 33 / 8 = 4.125 and 37 / 8 = 4.625
        assert_eq!(
            ProductRating::from_stars(stars(&[5, 4, 4, 4, 4, 4, 4, 4])).unwrap(),
            4.12
        );
        assert_eq!(
            ProductRating::from_stars(stars(&[5, 5, 5, 5, 4, 4, 4, 5])).unwrap(),
            4.62
        );
    }

    #[test]
    fn rating_is_absent_without_reviews() {
        assert!(ProductRating::from_stars(Vec::new()).is_none());
    }
}
