use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::review::Review;
use crate::domain::types::{ProductId, ProductPrice, ProductRating, ProductTitle};

/// Product with its reviews and the average star rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductWithReviewsDto {
    pub id: ProductId,
    pub title: ProductTitle,
    pub description: String,
    pub price: ProductPrice,
    pub reviews: Vec<Review>,
    /// `null` when the product has no reviews.
    pub rating: Option<ProductRating>,
}

impl ProductWithReviewsDto {
    pub fn new(product: Product, reviews: Vec<Review>) -> Self {
        let rating = ProductRating::from_stars(reviews.iter().map(|r| r.stars));
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            reviews,
            rating,
        }
    }
}
