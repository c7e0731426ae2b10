//! REST API module for HTTP endpoints
//!
//! Provides REST endpoints for the explorer front-end:
//! - `GET /api/expand` - Synonyms of the query terms
//! - `GET /api/search` - Run a search and make it current
//! - `GET /api/documents` - Documents of the current result
//! - `GET /api/documents/:id` - Single document
//! - `GET /api/documents/:id/related` - Documents sharing a theme
//! - `PUT /api/documents/:id/explored` - Mark a document as explored
//! - `GET /api/graph` - Nodes and edges of the current result
//! - `GET /api/export` - CSV export (`?format=standard|legacy`)

pub mod documents;
pub mod export;
pub mod graph;
pub mod search;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::error::SearchError;
use crate::orchestrator::AppliedSearch;

/// Common pagination parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Maximum number of items to return (default: 100, max: 1000)
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Number of items to skip
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    100
}

impl PaginationParams {
    /// Normalize limit to max 1000
    pub fn normalized_limit(&self) -> usize {
        self.limit.min(1000)
    }
}

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Ticket of the search the data belongs to
    pub sequence_id: u64,
    /// Total count (for paginated responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, sequence_id: u64) -> Self {
        Self {
            data,
            sequence_id,
            total: None,
        }
    }

    pub fn with_total(data: T, sequence_id: u64, total: usize) -> Self {
        Self {
            data,
            sequence_id,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }

    pub fn no_result() -> Self {
        Self {
            error: "No search has completed yet".to_string(),
            code: "NO_RESULT".to_string(),
        }
    }

    pub fn superseded(ticket: u64, latest: u64) -> Self {
        Self {
            error: format!("Search {} was superseded by search {}", ticket, latest),
            code: "SUPERSEDED".to_string(),
        }
    }

    /// Status code and body for a failed search
    pub fn from_search_error(err: &SearchError) -> (StatusCode, Self) {
        let status = match err {
            SearchError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
            SearchError::DocumentSourceFailure(_) => StatusCode::BAD_GATEWAY,
            SearchError::SearchTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        };
        (
            status,
            Self {
                error: err.to_string(),
                code: err.code().to_string(),
            },
        )
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Current result or a 404 `NO_RESULT` response
pub(crate) fn current_or_404(state: &AppState) -> Result<AppliedSearch, Response> {
    state
        .current()
        .ok_or_else(|| ApiError::no_result().into_response_with(StatusCode::NOT_FOUND))
}
