//! imtrend Server - Survey exploration API
//!
//! HTTP front end for a single loaded survey dataset. The exploration
//! context is immutable, so handlers share it without locking.

pub mod http;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use imtrend_core::ExplorerContext;

/// Shared application state
pub struct AppState {
    pub context: ExplorerContext,
}

impl AppState {
    pub fn new(context: ExplorerContext) -> Self {
        Self { context }
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Filter option lists
        .route("/facets", get(http::get_facets))
        // Chart + table for a selection
        .route("/explore", post(http::explore_selection))
        // System endpoints
        .route("/status", get(http::get_status))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("imtrend server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
