//! Product list state for the catalog page.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Product;

/// Catalog state backed by one fetch per page mount.
///
/// A failed fetch leaves `products` untouched, so whatever was last
/// displayed (possibly nothing) stays on screen.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub loading: bool,
}
