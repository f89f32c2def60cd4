//! Diesel row types and their conversions to domain entities.

pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod product;
pub mod review;
