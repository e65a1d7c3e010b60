//! Sticker Inventory
//!
//! A catalog data service plus a server-rendered browsing component, with
//! interchangeable data-source adapters for embedded hosting.

mod api;
mod catalog;
mod config;
mod errors;
mod inventory;
mod models;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog::Catalog;
use config::Config;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
    /// Base URL the embedding page uses to reach its own data service.
    pub page_base_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sticker Inventory");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Response delay: {:?}", config.response_delay);
    if let Some(web_url) = &config.list_api_url {
        tracing::info!("Page reads records from host list API at {}", web_url);
    }

    // Seed catalog
    let catalog = Arc::new(Catalog::seeded());
    tracing::info!("Catalog seeded with {} stickers", catalog.len());

    // Bind first so the page shell knows its own base URL even on port 0
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let addr = listener.local_addr()?;

    // Create application state
    let state = AppState {
        catalog,
        config: Arc::new(config),
        page_base_url: format!("http://{}", addr),
    };

    // Build router
    let app = create_router(state);

    tracing::info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new().route("/stickers", get(api::list_stickers));

    Router::new()
        .route("/", get(api::inventory_page))
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
