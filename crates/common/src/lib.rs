//! Entity model shared by every layer of the product catalog.

pub mod product;

pub use product::Product;
