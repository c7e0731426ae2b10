//! Graph endpoints - nodes and edges for the relationship view

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use super::{current_or_404, ApiResponse};
use crate::api::state::AppState;
use crate::relations;
use crate::types::{DocumentId, DocumentSet, Edge};

/// Response for GET /api/graph
#[derive(Debug, Serialize)]
pub struct GraphResponse<'a> {
    pub nodes: &'a DocumentSet,
    pub edges: Vec<Edge>,
}

/// GET /api/graph - Documents and their undirected edges
pub async fn get_graph(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let applied = match current_or_404(&state) {
        Ok(applied) => applied,
        Err(response) => return response,
    };

    let graph = GraphResponse {
        nodes: &applied.result.documents,
        edges: relations::edges(&applied.result.documents),
    };
    let total = applied.result.documents.len();
    Json(ApiResponse::with_total(graph, applied.ticket, total)).into_response()
}

/// GET /api/graph/stats - Counts per type and theme
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let applied = match current_or_404(&state) {
        Ok(applied) => applied,
        Err(response) => return response,
    };

    let stats = relations::stats(&applied.result.documents);
    Json(ApiResponse::new(stats, applied.ticket)).into_response()
}

/// GET /api/graph/clusters - Connected components
pub async fn get_clusters(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let applied = match current_or_404(&state) {
        Ok(applied) => applied,
        Err(response) => return response,
    };

    let clusters: Vec<Vec<DocumentId>> = relations::clusters(&applied.result.documents);
    let total = clusters.len();
    Json(ApiResponse::with_total(clusters, applied.ticket, total)).into_response()
}
