use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog record.
///
/// `id` and `created_at` are owned by the catalog service: they are empty
/// until the service assigns them on creation and never change afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier. Empty while unassigned.
    pub id: String,
    pub name: String,
    /// Exact-match filter key.
    pub category: String,
    pub price: f64,
    pub stock: i64,
    /// Creation time, set once by the catalog service.
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates a product with no identity or creation time yet.
    pub fn draft(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            created_at: None,
        }
    }

    /// Returns true once an identifier has been assigned.
    pub fn is_assigned(&self) -> bool {
        !self.id.is_empty()
    }
}
