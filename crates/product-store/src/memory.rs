use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use common::Product;
use tokio::sync::RwLock;

use crate::{ProductFilter, Result, StoreError, store::ProductStore};

/// In-memory product store implementation.
///
/// Provides the same interface as the MongoDB implementation. Clones share
/// the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<HashMap<String, Product>>>,
    closed: Arc<AtomicBool>,
}

impl InMemoryProductStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Returns true if no products are stored.
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }

    /// Releases the store. Every later operation fails with
    /// `StoreError::Unavailable`, for this handle and all its clones.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store is closed".to_string()));
        }
        Ok(())
    }

    async fn find(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.ensure_open()?;

        let products = self.products.read().await;
        let mut found: Vec<_> = products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        // Creation order, with id as a tiebreaker for equal timestamps
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(found)
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list_all(&self) -> Result<Vec<Product>> {
        self.find(&ProductFilter::all()).await
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.find(&ProductFilter::by_category(category)).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Product> {
        self.ensure_open()?;

        let products = self.products.read().await;
        products
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, product: Product) -> Result<Product> {
        self.ensure_open()?;

        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            return Err(StoreError::Conflict(product.id));
        }
        products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn update(&self, id: &str, product: Product) -> Result<Product> {
        self.ensure_open()?;

        let mut products = self.products.write().await;
        if let Some(stored) = products.get_mut(id) {
            stored.name = product.name.clone();
            stored.category = product.category.clone();
            stored.price = product.price;
        }
        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.ensure_open()?;

        self.products.write().await.remove(id);
        Ok(())
    }
}
