//! Business logic shared by the HTTP routes.
//!
//! Services are generic over the repository traits so they can be exercised
//! against [`crate::repository::test::TestRepository`] in unit tests.

pub mod categories;
pub mod errors;
pub mod products;
pub mod reviews;

pub use errors::{ServiceError, ServiceResult};
