use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, ProductId, ProductPrice, ProductTitle};

/// A product listed under a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: ProductTitle,
    /// Free-form description, empty when not supplied.
    pub description: String,
    pub price: ProductPrice,
    pub category_id: CategoryId,
}

/// Information required to create or fully replace a [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub title: ProductTitle,
    pub description: String,
    pub price: ProductPrice,
    pub category_id: CategoryId,
}
