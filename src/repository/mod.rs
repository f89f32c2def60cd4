use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, Product};
use crate::domain::review::{NewReview, Review};
use crate::domain::types::{CategoryId, CategoryName, ProductCount, ProductId, ReviewId};

pub mod category;
pub mod errors;
pub mod product;
pub mod review;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category ordered by id.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Retrieve a category by its exact name.
    fn get_category_by_name(&self, name: &CategoryName) -> RepositoryResult<Option<Category>>;
    /// List every category together with the number of products it owns.
    fn list_categories_with_count(&self) -> RepositoryResult<Vec<(Category, ProductCount)>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the stored row.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Overwrite every field of an existing category.
    fn update_category(&self, id: CategoryId, category: &NewCategory)
    -> RepositoryResult<Category>;
    /// Delete a category together with its products and their reviews.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List every product ordered by id.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product inside a transaction and return the stored row.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Overwrite every field of an existing product.
    fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<Product>;
    /// Delete a product together with its reviews.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}

/// Read-only operations for review entities.
pub trait ReviewReader {
    /// List every review ordered by id.
    fn list_reviews(&self) -> RepositoryResult<Vec<Review>>;
    /// Retrieve a review by its identifier.
    fn get_review_by_id(&self, id: ReviewId) -> RepositoryResult<Option<Review>>;
}

/// Write operations for review entities.
pub trait ReviewWriter {
    /// Persist a new review inside a transaction and return the stored row.
    fn create_review(&self, review: &NewReview) -> RepositoryResult<Review>;
    /// Overwrite every field of an existing review.
    fn update_review(&self, id: ReviewId, review: &NewReview) -> RepositoryResult<Review>;
    /// Delete a single review.
    fn delete_review(&self, id: ReviewId) -> RepositoryResult<usize>;
}
