//! Retrieval backend reached over HTTP

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::DocumentSource;
use crate::error::SourceError;
use crate::types::Document;

/// Fetches documents with `GET {endpoint}?q=<query>`
///
/// The backend answers with a JSON array of documents.
pub struct HttpDocumentSource {
    client: Client,
    endpoint: String,
}

impl HttpDocumentSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_request_timeout(endpoint, Duration::from_secs(30))
    }

    pub fn with_request_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch(&self, query: &str) -> Result<Vec<Document>, SourceError> {
        debug!(endpoint = %self.endpoint, query, "Fetching documents from backend");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Vec<Document>>().await?)
    }

    fn name(&self) -> &str {
        "http"
    }
}
