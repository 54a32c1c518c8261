//! Integration tests for the product service.
//!
//! These tests drive full product lifecycles through the service against the
//! in-memory store.

use chrono::Utc;
use domain::{CatalogError, Product, ProductService};
use product_store::{InMemoryProductStore, ProductStore};

/// Helper to create a test product service
fn create_service() -> ProductService<InMemoryProductStore> {
    ProductService::new(InMemoryProductStore::new())
}

mod product_lifecycle {
    use super::*;

    #[tokio::test]
    async fn create_update_delete_widget() {
        let service = create_service();
        let before = Utc::now();

        // Create
        let created = service
            .create_product(Product::draft("Widget", "tools", 9.99, 5))
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert!(created.created_at.unwrap() >= before);
        assert_eq!(created.name, "Widget");
        assert_eq!(created.category, "tools");
        assert_eq!(created.price, 9.99);
        assert_eq!(created.stock, 5);

        // Listed
        let all = service.get_all_products().await.unwrap();
        assert!(all.contains(&created));

        // Update
        let updated = service
            .update_product(&created.id, Product::draft("Widget Pro", "tools", 14.99, 0))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Widget Pro");
        assert_eq!(updated.price, 14.99);

        // Delete
        service.delete_product(&created.id).await.unwrap();

        // Gone
        let err = service.get_product_by_id(&created.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_unknown_product_leaves_store_untouched() {
        let service = create_service();
        let kept = service
            .create_product(Product::draft("Widget", "tools", 9.99, 5))
            .await
            .unwrap();

        let err = service.delete_product("unknown-id").await.unwrap_err();
        assert!(err.is_not_found());

        let all = service.get_all_products().await.unwrap();
        assert_eq!(all, vec![kept]);
    }

    #[tokio::test]
    async fn delete_twice_fails_second_time() {
        let service = create_service();
        let created = service
            .create_product(Product::draft("Widget", "tools", 9.99, 5))
            .await
            .unwrap();

        service.delete_product(&created.id).await.unwrap();
        let err = service.delete_product(&created.id).await.unwrap_err();
        assert!(err.is_not_found());
    }
}

mod queries {
    use super::*;

    #[tokio::test]
    async fn category_listing_matches_created_products_exactly() {
        let service = create_service();
        let mut tools = Vec::new();
        for (name, category) in [
            ("Hammer", "tools"),
            ("Rake", "garden"),
            ("Saw", "tools"),
            ("Hose", "garden"),
            ("Drill", "tools"),
        ] {
            let created = service
                .create_product(Product::draft(name, category, 10.0, 1))
                .await
                .unwrap();
            if category == "tools" {
                tools.push(created);
            }
        }

        let mut listed = service.get_products_by_category("tools").await.unwrap();
        listed.sort_by(|a, b| a.id.cmp(&b.id));
        tools.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(listed, tools);

        assert!(
            service
                .get_products_by_category("TOOLS")
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn empty_catalog_lists_nothing() {
        let service = create_service();
        assert!(service.get_all_products().await.unwrap().is_empty());
        assert!(
            service
                .get_products_by_category("tools")
                .await
                .unwrap()
                .is_empty()
        );
    }
}

mod updates {
    use super::*;

    #[tokio::test]
    async fn update_unknown_id_creates_nothing() {
        let service = create_service();

        let result = service
            .update_product("unknown-id", Product::draft("Ghost", "none", 1.0, 0))
            .await
            .unwrap();
        assert_eq!(result.id, "unknown-id");

        let err = service.get_product_by_id("unknown-id").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_ignores_caller_supplied_identity() {
        let service = create_service();
        let created = service
            .create_product(Product::draft("Widget", "tools", 9.99, 5))
            .await
            .unwrap();

        let forged = Product {
            id: "other-id".to_string(),
            created_at: Some(Utc::now()),
            ..Product::draft("Widget", "garden", 9.99, 5)
        };
        let updated = service.update_product(&created.id, forged).await.unwrap();
        assert_eq!(updated.id, created.id);

        let stored = service.store().get_by_id(&created.id).await.unwrap();
        assert_eq!(stored.category, "garden");
        assert_eq!(stored.created_at, created.created_at);
        assert!(service.get_product_by_id("other-id").await.is_err());
    }

    #[tokio::test]
    async fn invalid_update_leaves_record_unchanged() {
        let service = create_service();
        let created = service
            .create_product(Product::draft("Widget", "tools", 9.99, 5))
            .await
            .unwrap();

        let err = service
            .update_product(&created.id, Product::draft("Widget", "tools", -1.0, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice { .. }));

        let stored = service.get_product_by_id(&created.id).await.unwrap();
        assert_eq!(stored, created);
    }
}

mod concurrency {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let service = Arc::new(create_service());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .create_product(Product::draft(format!("Item {i}"), "bulk", 1.0, i))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().id);
        }

        assert_eq!(ids.len(), 50);
        assert_eq!(service.get_all_products().await.unwrap().len(), 50);
    }
}
