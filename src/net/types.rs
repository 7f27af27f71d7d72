//! Wire DTOs for the product service boundary.
//!
//! DESIGN
//! ======
//! The list endpoint returns more fields than the catalog renders (`id`,
//! `description`); serde's default unknown-field tolerance keeps this type
//! pinned to exactly what the UI consumes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A catalog entry as returned by the product service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name for the menu row.
    pub name: String,
    /// Unit price in the service's base currency.
    pub price: f64,
    /// Stock-keeping unit identifier.
    pub sku: String,
}
