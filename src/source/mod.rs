//! Document sources
//!
//! A search obtains its candidate documents from a [`DocumentSource`]:
//! - `SyntheticGenerator`: random batches, seedable for reproducible tests
//! - `HttpDocumentSource`: JSON documents from a retrieval backend

mod http;
mod synthetic;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::types::Document;

pub use http::HttpDocumentSource;
pub use synthetic::{ExploredPolicy, SyntheticGenerator, DEFAULT_BATCH_SIZE, SOURCES, THEMES};

/// Supplier of candidate documents for a query
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Produce the candidate documents for a query
    ///
    /// Connections on the returned documents are ignored; the orchestrator
    /// recomputes them.
    async fn fetch(&self, query: &str) -> Result<Vec<Document>, SourceError>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
