use thiserror::Error;

/// Errors that can occur when interacting with the product store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product matched the given identifier.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product with the same identifier is already stored.
    #[error("Product already exists: {0}")]
    Conflict(String),

    /// The store has been closed or cannot serve requests.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl StoreError {
    /// Returns true if the error signals a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result type for product store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
