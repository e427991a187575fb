//! # store-core
//!
//! Core types for the product store API.
//!
//! This crate provides:
//! - `Product`, the record served over HTTP
//! - `ProductParams` for lenient construction from query strings
//! - `Store`, the in-memory ordered product collection
//! - `StoreError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use store_core::{ProductParams, Store};
//!
//! let mut store = Store::seeded();
//!
//! let params = ProductParams {
//!     id: "4".into(),
//!     name: "Sprite".into(),
//!     price: "3.25".into(),
//!     ..Default::default()
//! };
//! let (product, _coerced) = params.into_product();
//! store.append(product);
//!
//! assert_eq!(store.search_by_price("9").unwrap().len(), 1);
//! assert!(store.find_by_id("4").is_some());
//! ```

pub mod error;
pub mod params;
pub mod product;
pub mod store;

// Re-exports for convenience
pub use error::{StoreError, StoreResult};
pub use params::ProductParams;
pub use product::Product;
pub use store::Store;
