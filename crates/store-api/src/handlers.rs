//! # Request Handlers
//!
//! Axum request handlers for the product store API.
//! List and search responses are wrapped as `{"data": [...]}`.

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use store_core::{Product, ProductParams, StoreError};
use tracing::{info, instrument, warn};

/// Handler error: status plus JSON payload
pub type ErrorResponse = (StatusCode, Json<Value>);

fn store_error_to_response(err: StoreError) -> ErrorResponse {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match err {
        StoreError::InvalidPriceParameter { .. } => json!({ "mensaje": "parametro invalido" }),
        StoreError::ProductNotFound { .. } => json!({ "error": "Product not found" }),
    };
    (status, Json(body))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn ping() -> impl IntoResponse {
    Json(json!({ "mensaje": "pong" }))
}

/// List all products
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(json!({ "data": store.list() }))
}

/// Products priced strictly above the path threshold
#[instrument(skip(state))]
pub async fn search_by_price(
    State(state): State<AppState>,
    Path(parametro_precio): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let products = state
        .store
        .read()
        .await
        .search_by_price(&parametro_precio)
        .map_err(|e| {
            warn!("{}", e);
            store_error_to_response(e)
        })?;

    Ok(Json(json!({ "data": products })))
}

/// Create a product from query parameters.
///
/// Unparsable fields fall back to zero values and repeated keys keep their
/// first value; the request always succeeds.
#[instrument(skip(state, pairs))]
pub async fn create_product(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<Product>) {
    let (product, coerced) = ProductParams::from_pairs(pairs).into_product();

    if !coerced.is_empty() {
        warn!("Coerced unparsable fields to zero values: {:?}", coerced);
    }

    state.store.write().await.append(product.clone());

    info!("Created product: id={}, name={}", product.id, product.name);

    (StatusCode::CREATED, Json(product))
}

/// Get single product
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ErrorResponse> {
    let store = state.store.read().await;
    let product = store.get(&id).map_err(|e| {
        info!("{}", e);
        store_error_to_response(e)
    })?;

    Ok(Json(product.clone()))
}
