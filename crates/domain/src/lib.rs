//! Catalog domain layer.
//!
//! This crate provides the orchestration service that sits between the HTTP
//! layer and the product store:
//! - identity and timestamp assignment on creation
//! - existence-guarded deletion
//! - field validation and logged, pass-through error handling

pub mod error;
pub mod service;

pub use common::Product;
pub use error::CatalogError;
pub use service::ProductService;
