//! Product CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::SecondsFormat;
use common::Product;
use domain::ProductService;
use product_store::ProductStore;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ProductStore> {
    pub product_service: ProductService<S>,
}

// -- Request types --

/// Body accepted by create and update.
///
/// `stock` may be omitted and defaults to zero. Identity and creation time
/// are never read from the request.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

impl From<ProductRequest> for Product {
    fn from(req: ProductRequest) -> Self {
        Product::draft(req.name, req.category, req.price, req.stock)
    }
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub created_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            price: product.price,
            stock: product.stock,
            created_at: product
                .created_at
                .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

fn to_responses(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}

fn parse_body(
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ProductRequest, ApiError> {
    payload
        .map(|Json(req)| req)
        .map_err(|e| ApiError::BadRequest(format!("invalid data: {}", e.body_text())))
}

// -- Handlers --

/// GET /products — list every product.
#[tracing::instrument(skip(state))]
pub async fn list<S: ProductStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state.product_service.get_all_products().await?;
    Ok(Json(to_responses(products)))
}

/// GET /products/categories/:category — list products in a category.
#[tracing::instrument(skip(state))]
pub async fn list_by_category<S: ProductStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state
        .product_service
        .get_products_by_category(&category)
        .await?;
    Ok(Json(to_responses(products)))
}

/// GET /products/:id — load a product by ID.
#[tracing::instrument(skip(state))]
pub async fn get<S: ProductStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.product_service.get_product_by_id(&id).await?;
    Ok(Json(product.into()))
}

/// POST /products/create — create a product.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: ProductStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let req = parse_body(payload)?;
    let created = state.product_service.create_product(req.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /products/update/:id — replace name, category, and price.
#[tracing::instrument(skip(state, payload))]
pub async fn update<S: ProductStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, ApiError> {
    let req = parse_body(payload)?;
    let updated = state
        .product_service
        .update_product(&id, req.into())
        .await?;
    Ok(Json(updated.into()))
}

/// DELETE /products/delete/:id — delete an existing product.
#[tracing::instrument(skip(state))]
pub async fn delete<S: ProductStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.product_service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
