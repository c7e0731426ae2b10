//! Document endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{current_or_404, ApiError, ApiResponse, PaginationParams};
use crate::api::state::AppState;
use crate::relations;
use crate::types::{Document, DocumentId};

/// GET /api/documents - Documents of the current result with pagination
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> impl IntoResponse {
    let applied = match current_or_404(&state) {
        Ok(applied) => applied,
        Err(response) => return response,
    };

    let total = applied.result.documents.len();
    let documents: Vec<&Document> = applied
        .result
        .documents
        .iter()
        .skip(params.offset)
        .take(params.normalized_limit())
        .collect();

    Json(ApiResponse::with_total(documents, applied.ticket, total)).into_response()
}

/// GET /api/documents/:id - Single document
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DocumentId>,
) -> impl IntoResponse {
    let applied = match current_or_404(&state) {
        Ok(applied) => applied,
        Err(response) => return response,
    };

    match applied.result.documents.get(id) {
        Some(doc) => Json(ApiResponse::new(doc, applied.ticket)).into_response(),
        None => ApiError::not_found(format!("Document {} not found", id))
            .into_response_with(StatusCode::NOT_FOUND),
    }
}

/// GET /api/documents/:id/related - Documents sharing a theme with `id`
pub async fn get_related(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DocumentId>,
) -> impl IntoResponse {
    let applied = match current_or_404(&state) {
        Ok(applied) => applied,
        Err(response) => return response,
    };

    match relations::related(&applied.result.documents, id) {
        Some(related) => {
            let total = related.related.len();
            Json(ApiResponse::with_total(related, applied.ticket, total)).into_response()
        }
        None => ApiError::not_found(format!("Document {} not found", id))
            .into_response_with(StatusCode::NOT_FOUND),
    }
}

/// Body of PUT /api/documents/:id/explored
#[derive(Debug, Deserialize)]
pub struct ExploredUpdate {
    pub explored: bool,
}

#[derive(Debug, Serialize)]
pub struct ExploredChange {
    pub id: DocumentId,
    pub explored: bool,
    pub previous: bool,
}

/// PUT /api/documents/:id/explored - Set the explored flag
pub async fn set_explored(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DocumentId>,
    Json(update): Json<ExploredUpdate>,
) -> impl IntoResponse {
    if state.current().is_none() {
        return ApiError::no_result().into_response_with(StatusCode::NOT_FOUND);
    }

    match state.session.set_explored(id, update.explored) {
        Some(previous) => {
            let change = ExploredChange {
                id,
                explored: update.explored,
                previous,
            };
            Json(ApiResponse::new(change, state.current_sequence_id())).into_response()
        }
        None => ApiError::not_found(format!("Document {} not found", id))
            .into_response_with(StatusCode::NOT_FOUND),
    }
}
