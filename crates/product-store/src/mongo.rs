use async_trait::async_trait;
use bson::doc;
use common::Product;
use futures_util::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::{ProductFilter, Result, StoreError, store::ProductStore};

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

/// Stored shape of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    category: String,
    price: f64,
    stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<bson::DateTime>,
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            stock: product.stock,
            created_at: product.created_at.map(bson::DateTime::from_chrono),
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            category: doc.category,
            price: doc.price,
            stock: doc.stock,
            created_at: doc.created_at.map(|dt| dt.to_chrono()),
        }
    }
}

/// MongoDB-backed product store.
///
/// Owns a single client handle; the driver pools connections internally so
/// clones of the store can be used from concurrent requests.
#[derive(Clone)]
pub struct MongoProductStore {
    client: Client,
    collection: Collection<ProductDocument>,
}

impl MongoProductStore {
    /// Creates a store over an existing client.
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection(collection);
        Self { client, collection }
    }

    /// Connects to the deployment described by `uri`.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        tracing::info!(database, collection, "connected to MongoDB");
        Ok(Self::new(client, database, collection))
    }

    /// Creates the category index used by category lookups.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder().keys(doc! { "category": 1 }).build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Shuts the client down, waiting for in-flight operations to finish.
    pub async fn close(self) {
        self.client.shutdown().await;
    }

    async fn find(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let cursor = self.collection.find(filter.to_document()).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn list_all(&self) -> Result<Vec<Product>> {
        self.find(&ProductFilter::all()).await
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.find(&ProductFilter::by_category(category)).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Product> {
        self.collection
            .find_one(ProductFilter::by_id(id).to_document())
            .await?
            .map(Product::from)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, product: Product) -> Result<Product> {
        self.collection
            .insert_one(ProductDocument::from(&product))
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    return StoreError::Conflict(product.id.clone());
                }
                StoreError::Database(e)
            })?;

        Ok(product)
    }

    async fn update(&self, id: &str, product: Product) -> Result<Product> {
        let changes = doc! {
            "$set": {
                "name": product.name.as_str(),
                "category": product.category.as_str(),
                "price": product.price,
            }
        };

        let result = self
            .collection
            .update_one(ProductFilter::by_id(id).to_document(), changes)
            .await?;
        tracing::debug!(id, matched = result.matched_count, "product update applied");

        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let result = self
            .collection
            .delete_one(ProductFilter::by_id(id).to_document())
            .await?;
        tracing::debug!(id, deleted = result.deleted_count, "product delete applied");

        Ok(())
    }
}
