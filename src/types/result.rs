//! Search result container

use serde::Serialize;

use super::{DocumentSet, SynonymMap};

/// Output of one search: expanded terms plus the annotated documents
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub query: String,
    pub synonyms: SynonymMap,
    pub documents: DocumentSet,
    /// Unix timestamp in milliseconds
    #[serde(rename = "generatedAt")]
    pub generated_at: i64,
}

impl SearchResult {
    pub fn new(query: impl Into<String>, synonyms: SynonymMap, documents: DocumentSet) -> Self {
        Self {
            query: query.into(),
            synonyms,
            documents,
            generated_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}
