//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{documents, export, graph, search};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - the explorer front-end is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/expand", get(search::expand_query))
        .route("/api/search", get(search::search))
        .route("/api/documents", get(documents::list_documents))
        .route("/api/documents/:id", get(documents::get_document))
        .route("/api/documents/:id/related", get(documents::get_related))
        .route("/api/documents/:id/explored", put(documents::set_explored))
        .route("/api/graph", get(graph::get_graph))
        .route("/api/graph/stats", get(graph::get_stats))
        .route("/api/graph/clusters", get(graph::get_clusters))
        .route("/api/export", get(export::export_result))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
