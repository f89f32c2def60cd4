use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, CategoryName, ProductCount};

/// Category annotated with the number of products it owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryWithCountDto {
    pub id: CategoryId,
    pub name: CategoryName,
    pub products_count: ProductCount,
}

impl From<(Category, ProductCount)> for CategoryWithCountDto {
    fn from((category, products_count): (Category, ProductCount)) -> Self {
        Self {
            id: category.id,
            name: category.name,
            products_count,
        }
    }
}
