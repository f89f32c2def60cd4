//! Domain entities and value objects shared by the persistence and service
//! layers.

pub mod category;
pub mod product;
pub mod review;
pub mod types;
