use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductId, ReviewId, ReviewStars, ReviewText};

/// A customer review left on a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub text: ReviewText,
    pub stars: ReviewStars,
    pub product_id: ProductId,
}

/// Information required to create or fully replace a [`Review`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReview {
    pub text: ReviewText,
    pub stars: ReviewStars,
    pub product_id: ProductId,
}
