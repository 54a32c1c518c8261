use async_trait::async_trait;
use common::Product;

use crate::Result;

/// Core trait for product persistence.
///
/// Implementations translate entity operations into store queries and apply
/// no business rules: identity and timestamps must already be assigned by
/// the caller. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Retrieves every stored product.
    ///
    /// Order is determined by the backend. Returns an empty list when the
    /// store holds no products.
    async fn list_all(&self) -> Result<Vec<Product>>;

    /// Retrieves the products whose category equals `category` exactly.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>>;

    /// Retrieves a single product.
    ///
    /// Fails with `StoreError::NotFound` when no product has this id.
    async fn get_by_id(&self, id: &str) -> Result<Product>;

    /// Persists a product as-is and returns it.
    async fn create(&self, product: Product) -> Result<Product>;

    /// Replaces the name, category, and price of the product matching `id`.
    ///
    /// Returns the input record. Succeeds without effect when nothing
    /// matches.
    async fn update(&self, id: &str, product: Product) -> Result<Product>;

    /// Removes the product matching `id`.
    ///
    /// Succeeds without effect when nothing matches.
    async fn delete(&self, id: &str) -> Result<()>;
}
