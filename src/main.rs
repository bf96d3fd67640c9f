use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod catalog;
mod config;
mod error;
mod handlers;
mod models;

use crate::catalog::Catalog;
use crate::config::Config;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,products_api=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        catalog: Arc::new(RwLock::new(Catalog::with_seed())),
    };
    info!(
        seeded = state.catalog.read().await.len(),
        "Catalog initialized"
    );

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Products API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Root & health ───────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))

        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            "/api/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/api/products/:id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .route(
            "/api/products/search/:query",
            get(handlers::products::search_products),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        // very_permissive rather than permissive: the CORS policy also
        // allows credentials alongside wildcard origin/method/header.
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
