//! Response shapes for the aggregate endpoints.

pub mod categories;
pub mod products;
