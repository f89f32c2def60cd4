use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName};

/// A catalog category owning zero or more products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
}

/// Data required to insert or fully replace a [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
}
