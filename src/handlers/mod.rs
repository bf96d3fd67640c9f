pub mod products;

use axum::{http::StatusCode, Json};
use serde_json::json;

pub async fn root() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Welcome to the Products API!",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "products-api" })))
}
