use bson::{Document, doc};
use common::Product;

/// Exact-match filter over stored products.
///
/// Every backend translates the same filter: the in-memory store evaluates
/// it with [`ProductFilter::matches`], MongoDB receives
/// [`ProductFilter::to_document`]. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Match on the product identifier.
    pub id: Option<String>,

    /// Match on the product category.
    pub category: Option<String>,
}

impl ProductFilter {
    /// Creates a filter matching every product.
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a filter for a single identifier.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Creates a filter for a category.
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    /// Returns true if the product satisfies every set criterion.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref id) = self.id
            && &product.id != id
        {
            return false;
        }
        if let Some(ref category) = self.category
            && &product.category != category
        {
            return false;
        }
        true
    }

    /// Builds the equivalent MongoDB query document.
    pub fn to_document(&self) -> Document {
        let mut filter = doc! {};
        if let Some(ref id) = self.id {
            filter.insert("_id", id.as_str());
        }
        if let Some(ref category) = self.category {
            filter.insert("category", category.as_str());
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            ..Product::draft("Widget", category, 1.0, 1)
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ProductFilter::all();
        assert!(filter.matches(&product("a", "tools")));
        assert!(filter.to_document().is_empty());
    }

    #[test]
    fn category_filter_is_exact() {
        let filter = ProductFilter::by_category("tools");
        assert!(filter.matches(&product("a", "tools")));
        assert!(!filter.matches(&product("a", "Tools")));
        assert!(!filter.matches(&product("a", "tools ")));
        assert_eq!(filter.to_document(), doc! { "category": "tools" });
    }

    #[test]
    fn id_filter_targets_document_key() {
        let filter = ProductFilter::by_id("abc");
        assert!(filter.matches(&product("abc", "tools")));
        assert!(!filter.matches(&product("abd", "tools")));
        assert_eq!(filter.to_document(), doc! { "_id": "abc" });
    }
}
