//! Persistence gateway for catalog products.
//!
//! Defines the [`ProductStore`] trait together with an in-memory backend and
//! a MongoDB backend. Stores translate entity operations into queries and
//! commands; they never assign identity or enforce business rules.

pub mod error;
pub mod filter;
pub mod memory;
pub mod mongo;
pub mod store;

pub use common::Product;
pub use error::{Result, StoreError};
pub use filter::ProductFilter;
pub use memory::InMemoryProductStore;
pub use mongo::MongoProductStore;
pub use store::ProductStore;
