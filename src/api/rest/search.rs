//! Search and expansion endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::orchestrator::SearchOutcome;
use crate::relations;
use crate::types::{Edge, SearchResult};

/// Query parameters for search and expansion
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Raw query; empty is allowed
    #[serde(default)]
    pub q: String,
}

/// Body of a successful search
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    #[serde(flatten)]
    pub result: &'a SearchResult,
    pub edges: Vec<Edge>,
}

/// GET /api/expand - Synonyms of the query terms, without fetching documents
pub async fn expand_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let synonyms = state.session.orchestrator().expand(&params.q);
    Json(ApiResponse::new(synonyms, state.current_sequence_id()))
}

/// GET /api/search - Run a search and make it the current result
///
/// Answers 409 when a newer search was issued before this one finished.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    match state.session.run(&params.q).await {
        Ok(SearchOutcome::Applied(applied)) => {
            let response = SearchResponse {
                result: &applied.result,
                edges: relations::edges(&applied.result.documents),
            };
            let total = applied.result.documents.len();
            (
                StatusCode::OK,
                Json(ApiResponse::with_total(response, applied.ticket, total)),
            )
                .into_response()
        }
        Ok(SearchOutcome::Superseded { ticket, latest }) => {
            ApiError::superseded(ticket, latest).into_response_with(StatusCode::CONFLICT)
        }
        Err(e) => {
            warn!(query = %params.q, error = %e, "Search failed");
            let (status, error) = ApiError::from_search_error(&e);
            error.into_response_with(status)
        }
    }
}
