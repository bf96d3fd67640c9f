use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{CreateProduct, Product, UpdateProduct},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let catalog = state.catalog.read().await;
    Json(catalog.list())
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Product>> {
    let catalog = state.catalog.read().await;
    Ok(Json(catalog.get(id)?))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let Json(payload) = payload.map_err(|rej| AppError::Validation(rej.body_text()))?;

    let product = state.catalog.write().await.create(payload);
    info!(id = product.id, name = %product.name, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<UpdateProduct>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let Json(payload) = payload.map_err(|rej| AppError::Validation(rej.body_text()))?;

    let product = state.catalog.write().await.update(id, payload)?;
    info!(id, "Updated product");

    Ok(Json(product))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<serde_json::Value>> {
    let product = state.catalog.write().await.delete(id)?;
    info!(id, "Deleted product");

    Ok(Json(serde_json::json!({
        "message": "Product deleted successfully",
        "deleted_product": product,
    })))
}

// ── Search ────────────────────────────────────────────────────────────────────

pub async fn search_products(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Json<serde_json::Value> {
    let catalog = state.catalog.read().await;
    let results = catalog.search(&query);

    Json(serde_json::json!({
        "query": query,
        "total": results.len(),
        "results": results,
    }))
}
