use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Product, ProductService};
use product_store::InMemoryProductStore;

fn populated_service(
    rt: &tokio::runtime::Runtime,
    count: usize,
) -> ProductService<InMemoryProductStore> {
    let service = ProductService::new(InMemoryProductStore::new());
    rt.block_on(async {
        for i in 0..count {
            let category = if i % 2 == 0 { "tools" } else { "garden" };
            service
                .create_product(Product::draft(format!("Product {i}"), category, 10.0, 1))
                .await
                .unwrap();
        }
    });
    service
}

fn bench_create_product(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = ProductService::new(InMemoryProductStore::new());

    c.bench_function("catalog/create_product", |b| {
        b.iter(|| {
            rt.block_on(async {
                service
                    .create_product(Product::draft("Widget", "tools", 9.99, 5))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_get_products_by_category(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = populated_service(&rt, 1000);

    c.bench_function("catalog/by_category_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                service.get_products_by_category("tools").await.unwrap();
            });
        });
    });
}

fn bench_full_lifecycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = ProductService::new(InMemoryProductStore::new());

    c.bench_function("catalog/create_update_delete", |b| {
        b.iter(|| {
            rt.block_on(async {
                let created = service
                    .create_product(Product::draft("Widget", "tools", 9.99, 5))
                    .await
                    .unwrap();
                service
                    .update_product(&created.id, Product::draft("Widget Pro", "tools", 14.99, 5))
                    .await
                    .unwrap();
                service.delete_product(&created.id).await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_create_product,
    bench_get_products_by_category,
    bench_full_lifecycle,
);
criterion_main!(benches);
