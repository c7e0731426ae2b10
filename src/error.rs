//! Error types
//!
//! Each layer has its own enum; [`SearchError`] is what callers of a search
//! see.

use thiserror::Error;

use crate::types::DocumentId;

/// A batch of documents could not be turned into a [`crate::types::DocumentSet`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentSetError {
    #[error("document id must be positive")]
    ZeroId,

    #[error("duplicate document id {0}")]
    DuplicateId(DocumentId),

    #[error("document {id} has a position outside [0,100]x[0,100]")]
    PositionOutOfRange { id: DocumentId },
}

/// The document source could not produce a batch
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("document backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("document backend {endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("document source returned an invalid batch: {0}")]
    InvalidBatch(#[from] DocumentSetError),

    #[error("document source unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by a search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    #[error(transparent)]
    DocumentSourceFailure(#[from] SourceError),

    #[error("search timed out after {elapsed_ms} ms")]
    SearchTimeout { elapsed_ms: u64 },
}

impl SearchError {
    /// Stable machine-readable code, used by the HTTP layer
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidQuery { .. } => "INVALID_QUERY",
            SearchError::DocumentSourceFailure(_) => "DOCUMENT_SOURCE_FAILURE",
            SearchError::SearchTimeout { .. } => "SEARCH_TIMEOUT",
        }
    }
}

/// A synonym dictionary file could not be loaded
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read synonym dictionary: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse synonym dictionary: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_failure_message_is_transparent() {
        let err = SearchError::from(SourceError::Unavailable("backend down".to_string()));
        assert_eq!(err.to_string(), "document source unavailable: backend down");
        assert_eq!(err.code(), "DOCUMENT_SOURCE_FAILURE");
    }

    #[test]
    fn test_invalid_batch_wraps_set_error() {
        let err = SourceError::from(DocumentSetError::DuplicateId(3));
        assert_eq!(
            err.to_string(),
            "document source returned an invalid batch: duplicate document id 3"
        );
    }
}
