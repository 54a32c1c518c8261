//! HTTP API server for the product catalog.
//!
//! Exposes product CRUD endpoints backed by the catalog service, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use domain::ProductService;
use metrics_exporter_prometheus::PrometheusHandle;
use product_store::ProductStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::products::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ProductStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/products", get(routes::products::list::<S>))
        .route("/products/{id}", get(routes::products::get::<S>))
        .route(
            "/products/categories/{category}",
            get(routes::products::list_by_category::<S>),
        )
        .route("/products/create", post(routes::products::create::<S>))
        .route("/products/update/{id}", put(routes::products::update::<S>))
        .route(
            "/products/delete/{id}",
            delete(routes::products::delete::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a product store.
pub fn create_state<S: ProductStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        product_service: ProductService::new(store),
    })
}
