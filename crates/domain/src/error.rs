//! Catalog error types.

use product_store::StoreError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An error from the product store, passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The product targeted for deletion does not exist.
    #[error("product not found: {id}")]
    ProductNotFound { id: String },

    /// Product name is required.
    #[error("Product name is required")]
    NameRequired,

    /// Invalid price.
    #[error("Invalid price: {price} (must be a non-negative number)")]
    InvalidPrice { price: f64 },

    /// Invalid stock quantity.
    #[error("Invalid stock: {stock} (must not be negative)")]
    InvalidStock { stock: i64 },
}

impl CatalogError {
    /// Returns true for every error meaning "no product has this id",
    /// whether synthesized by the service or reported by the store.
    pub fn is_not_found(&self) -> bool {
        match self {
            CatalogError::ProductNotFound { .. } => true,
            CatalogError::Store(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Returns true for errors caused by invalid product fields.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::NameRequired
                | CatalogError::InvalidPrice { .. }
                | CatalogError::InvalidStock { .. }
        )
    }
}
