//! CSV export endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::warn;

use super::{current_or_404, ApiError};
use crate::api::state::AppState;
use crate::export::{export_csv, ExportFormat};

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// `standard` or `legacy`, case-insensitive
    #[serde(default)]
    pub format: Option<String>,
}

/// GET /api/export - Current result as CSV
pub async fn export_result(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> impl IntoResponse {
    let format = match params.format.as_deref().map(str::parse::<ExportFormat>) {
        None => ExportFormat::default(),
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            return ApiError::bad_request(e).into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let applied = match current_or_404(&state) {
        Ok(applied) => applied,
        Err(response) => return response,
    };

    let body = match export_csv(&applied.result, format) {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "CSV export failed");
            return ApiError::internal(e.to_string())
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"juris-export.csv\"",
            ),
        ],
        body,
    )
        .into_response()
}
