//! # store-api
//!
//! HTTP API layer for product-store-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints over the in-memory product store
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/v1/ping` | Health check |
//! | GET | `/api/v1/producto` | List products |
//! | GET | `/api/v1/producto/search/{price}` | Products priced above `price` |
//! | POST | `/api/v1/producto/productparams` | Create product from query params |
//! | GET | `/api/v1/producto/products/{id}` | Get product |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
