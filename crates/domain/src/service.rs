//! Product service applying catalog rules on top of a product store.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use common::Product;
use product_store::{ProductStore, StoreError};
use uuid::Uuid;

use crate::error::CatalogError;

/// Service for managing catalog products.
///
/// The only component that assigns product identity and creation time, and
/// the only one that checks existence before deleting. Store failures are
/// logged with the operation name and returned unchanged.
pub struct ProductService<S: ProductStore> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    /// Creates a new product service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists every product in the catalog.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        observe("get_all_products", self.store.list_all().await)
    }

    /// Lists the products in a category. An unknown category yields an
    /// empty list.
    #[tracing::instrument(skip(self))]
    pub async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        observe(
            "get_products_by_category",
            self.store.list_by_category(category).await,
        )
    }

    /// Loads a product by id.
    ///
    /// A missing product surfaces as the store's not-found error.
    #[tracing::instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: &str) -> Result<Product, CatalogError> {
        observe("get_product_by_id", self.store.get_by_id(id).await)
    }

    /// Creates a product.
    ///
    /// Any `id` or `created_at` on the input is overwritten with a fresh
    /// UUID and the current time.
    #[tracing::instrument(skip(self))]
    pub async fn create_product(&self, mut product: Product) -> Result<Product, CatalogError> {
        validate("create_product", &product)?;

        product.id = Uuid::new_v4().to_string();
        product.created_at = Some(creation_time());

        let created = observe("create_product", self.store.create(product).await)?;
        tracing::info!(id = %created.id, category = %created.category, "product created");
        Ok(created)
    }

    /// Updates the name, category, and price of a product.
    ///
    /// Does not check that the product exists: updating an unknown id
    /// succeeds and changes nothing. Stock and creation time are never
    /// written by an update.
    #[tracing::instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: &str,
        mut product: Product,
    ) -> Result<Product, CatalogError> {
        validate("update_product", &product)?;

        product.id = id.to_string();
        product.created_at = None;

        observe("update_product", self.store.update(id, product).await)
    }

    /// Deletes a product after confirming it exists.
    ///
    /// The store is never asked to delete an id that could not be loaded.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> Result<(), CatalogError> {
        let product = self.get_product_by_id(id).await?;

        if !product.is_assigned() {
            tracing::warn!(id, "product not found on db");
            return Err(reject(
                "delete_product",
                CatalogError::ProductNotFound { id: id.to_string() },
            ));
        }

        observe("delete_product", self.store.delete(id).await)?;
        tracing::info!(id, "product deleted");
        Ok(())
    }
}

/// Current time rounded up to the millisecond the document store keeps, so
/// it never precedes the moment of the call.
fn creation_time() -> DateTime<Utc> {
    let now = Utc::now();
    let truncated = now.trunc_subsecs(3);
    if truncated < now {
        truncated + Duration::milliseconds(1)
    } else {
        truncated
    }
}

/// Records the outcome of a store call and logs failures before handing
/// them back to the caller.
fn observe<T>(
    operation: &'static str,
    result: Result<T, StoreError>,
) -> Result<T, CatalogError> {
    metrics::counter!("catalog_operations_total", "operation" => operation).increment(1);

    result.map_err(|err| {
        metrics::counter!("catalog_operation_errors_total", "operation" => operation).increment(1);
        tracing::error!(operation, error = %err, "error occurred while calling the product store");
        CatalogError::from(err)
    })
}

fn validate(operation: &'static str, product: &Product) -> Result<(), CatalogError> {
    let result = if product.name.trim().is_empty() {
        Err(CatalogError::NameRequired)
    } else if !product.price.is_finite() || product.price < 0.0 {
        Err(CatalogError::InvalidPrice {
            price: product.price,
        })
    } else if product.stock < 0 {
        Err(CatalogError::InvalidStock {
            stock: product.stock,
        })
    } else {
        Ok(())
    };

    result.map_err(|err| {
        tracing::warn!(operation, error = %err, "rejected invalid product");
        reject(operation, err)
    })
}

/// Counts an operation the service refused without reaching the store.
fn reject(operation: &'static str, err: CatalogError) -> CatalogError {
    metrics::counter!("catalog_operations_total", "operation" => operation).increment(1);
    metrics::counter!("catalog_operation_errors_total", "operation" => operation).increment(1);
    err
}
