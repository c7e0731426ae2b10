//! Search orchestration
//!
//! A search expands the query, fetches candidates from the document source,
//! attaches the relation graph and returns everything as one
//! [`SearchResult`]. Either the whole result is produced or an error is.

mod session;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{SearchError, SourceError};
use crate::relations::build_relations;
use crate::search::{expand, SynonymDictionary};
use crate::source::DocumentSource;
use crate::types::{DocumentSet, SearchResult, SynonymMap};
use crate::validation::validate_themes;

pub use session::{AppliedSearch, SearchOutcome, SearchSession};

/// Composes the term expander, a document source and the relation builder
pub struct SearchOrchestrator {
    dictionary: Arc<SynonymDictionary>,
    source: Arc<dyn DocumentSource>,
    latency: Duration,
    timeout: Option<Duration>,
    max_query_chars: Option<usize>,
}

impl SearchOrchestrator {
    /// Orchestrator over `source` with the built-in legal dictionary
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self::builder(source).build()
    }

    pub fn builder(source: Arc<dyn DocumentSource>) -> SearchOrchestratorBuilder {
        SearchOrchestratorBuilder {
            dictionary: None,
            source,
            latency: Duration::ZERO,
            timeout: None,
            max_query_chars: None,
        }
    }

    pub fn dictionary(&self) -> &SynonymDictionary {
        &self.dictionary
    }

    /// Expand a query without fetching documents
    pub fn expand(&self, query: &str) -> SynonymMap {
        expand(query, &self.dictionary)
    }

    /// Run one search
    pub async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        self.validate(query)?;

        let started = Instant::now();
        let synonyms = self.expand(query);
        debug!(query, matched = synonyms.len(), "Expanded query terms");

        let documents = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.collect_documents(query))
                .await
                .map_err(|_| {
                    let elapsed_ms = started.elapsed().as_millis() as u64;
                    warn!(query, elapsed_ms, "Search timed out");
                    SearchError::SearchTimeout { elapsed_ms }
                })??,
            None => self.collect_documents(query).await?,
        };

        info!(
            query,
            source = self.source.name(),
            documents = documents.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Search completed"
        );

        Ok(SearchResult::new(query, synonyms, documents))
    }

    fn validate(&self, query: &str) -> Result<(), SearchError> {
        if let Some(max) = self.max_query_chars {
            let count = query.chars().count();
            if count > max {
                return Err(SearchError::InvalidQuery {
                    reason: format!("query has {} characters, at most {} allowed", count, max),
                });
            }
        }
        Ok(())
    }

    /// Fetch, validate and annotate the candidate set
    async fn collect_documents(&self, query: &str) -> Result<DocumentSet, SearchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let batch = self.source.fetch(query).await.map_err(|e| {
            warn!(query, source = self.source.name(), error = %e, "Document source failed");
            e
        })?;

        for warning in validate_themes(batch.iter().flat_map(|d| d.themes.iter().map(String::as_str))) {
            debug!(source = self.source.name(), "{}", warning);
        }

        let mut documents = DocumentSet::from_documents(batch).map_err(SourceError::from)?;
        build_relations(&mut documents);
        Ok(documents)
    }
}

/// Builder for [`SearchOrchestrator`]
pub struct SearchOrchestratorBuilder {
    dictionary: Option<Arc<SynonymDictionary>>,
    source: Arc<dyn DocumentSource>,
    latency: Duration,
    timeout: Option<Duration>,
    max_query_chars: Option<usize>,
}

impl SearchOrchestratorBuilder {
    /// Replace the built-in dictionary
    pub fn dictionary(mut self, dictionary: impl Into<Arc<SynonymDictionary>>) -> Self {
        self.dictionary = Some(dictionary.into());
        self
    }

    /// Simulated delay before the source is queried
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Upper bound for fetching and annotating documents
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reject queries longer than `max` characters
    pub fn max_query_chars(mut self, max: Option<usize>) -> Self {
        self.max_query_chars = max;
        self
    }

    pub fn build(self) -> SearchOrchestrator {
        SearchOrchestrator {
            dictionary: self
                .dictionary
                .unwrap_or_else(|| Arc::new(SynonymDictionary::legal_default())),
            source: self.source,
            latency: self.latency,
            timeout: self.timeout,
            max_query_chars: self.max_query_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::relations::check_relations;
    use crate::source::SyntheticGenerator;
    use crate::types::{Document, DocumentType, Position};

    struct FailingSource;

    #[async_trait]
    impl DocumentSource for FailingSource {
        async fn fetch(&self, _query: &str) -> Result<Vec<Document>, SourceError> {
            Err(SourceError::Unavailable("index offline".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct DuplicateSource;

    #[async_trait]
    impl DocumentSource for DuplicateSource {
        async fn fetch(&self, _query: &str) -> Result<Vec<Document>, SourceError> {
            let doc = Document::new(1, DocumentType::Code, "t", "s", "a", Position::new(1.0, 1.0));
            Ok(vec![doc.clone(), doc])
        }

        fn name(&self) -> &str {
            "duplicate"
        }
    }

    #[tokio::test]
    async fn test_search_combines_expansion_and_relations() {
        let orchestrator = SearchOrchestrator::new(Arc::new(SyntheticGenerator::seeded(5)));
        let result = orchestrator.search("le contrat juridique").await.unwrap();

        assert_eq!(result.query, "le contrat juridique");
        let terms: Vec<&str> = result.synonyms.terms().collect();
        assert_eq!(terms, vec!["contrat", "juridique"]);
        assert_eq!(result.documents.len(), 50);
        assert_eq!(check_relations(&result.documents), Ok(()));
    }

    #[tokio::test]
    async fn test_search_with_injected_dictionary() {
        let dictionary = SynonymDictionary::from_entries([(
            "abus",
            vec!["excès".to_string(), "détournement".to_string()],
        )]);
        let orchestrator = SearchOrchestrator::builder(Arc::new(SyntheticGenerator::seeded(5)))
            .dictionary(dictionary)
            .build();

        let result = orchestrator.search("abus contrat").await.unwrap();
        let terms: Vec<&str> = result.synonyms.terms().collect();
        assert_eq!(terms, vec!["abus"]);
    }

    #[tokio::test]
    async fn test_source_failure_is_propagated() {
        let orchestrator = SearchOrchestrator::new(Arc::new(FailingSource));
        let err = orchestrator.search("contrat").await.unwrap_err();
        assert!(matches!(
            err,
            SearchError::DocumentSourceFailure(SourceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_batch_is_a_source_failure() {
        let orchestrator = SearchOrchestrator::new(Arc::new(DuplicateSource));
        let err = orchestrator.search("contrat").await.unwrap_err();
        assert!(matches!(
            err,
            SearchError::DocumentSourceFailure(SourceError::InvalidBatch(_))
        ));
    }

    #[tokio::test]
    async fn test_timeout() {
        let orchestrator = SearchOrchestrator::builder(Arc::new(SyntheticGenerator::seeded(5)))
            .latency(Duration::from_millis(200))
            .timeout(Some(Duration::from_millis(20)))
            .build();

        let err = orchestrator.search("contrat").await.unwrap_err();
        assert!(matches!(err, SearchError::SearchTimeout { .. }));
    }

    #[tokio::test]
    async fn test_latency_defers_result() {
        let orchestrator = SearchOrchestrator::builder(Arc::new(SyntheticGenerator::seeded(5)))
            .latency(Duration::from_millis(30))
            .build();

        let started = Instant::now();
        orchestrator.search("obligation").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_max_query_chars() {
        let orchestrator = SearchOrchestrator::builder(Arc::new(SyntheticGenerator::seeded(5)))
            .max_query_chars(Some(8))
            .build();

        assert!(orchestrator.search("contrat").await.is_ok());
        let err = orchestrator.search("contrat juridique").await.unwrap_err();
        assert!(matches!(err, SearchError::InvalidQuery { .. }));
    }

    #[tokio::test]
    async fn test_empty_query_is_accepted() {
        let orchestrator = SearchOrchestrator::new(Arc::new(SyntheticGenerator::seeded(5)));
        let result = orchestrator.search("").await.unwrap();
        assert!(result.synonyms.is_empty());
        assert_eq!(result.documents.len(), 50);
    }
}
