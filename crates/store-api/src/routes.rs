//! # Routes
//!
//! Axum router configuration for the product store API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes (all under `/api/v1`):
///   - GET  /ping - Health check
///   - GET  /producto - List all products
///   - GET  /producto/search/{parametro_precio} - Products priced above a threshold
///   - POST /producto/productparams - Create a product from query parameters
///   - GET  /producto/products/{id} - Get product by ID
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let product_routes = Router::new()
        .route("/producto", get(handlers::list_products))
        .route(
            "/producto/search/{parametro_precio}",
            get(handlers::search_by_price),
        )
        .route("/producto/productparams", post(handlers::create_product))
        .route("/producto/products/{id}", get(handlers::get_product));

    let api_routes = Router::new()
        .route("/ping", get(handlers::ping))
        .merge(product_routes);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
