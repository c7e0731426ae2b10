//! Single-slot search session with last-write-wins by issuance order

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::SearchOrchestrator;
use crate::error::SearchError;
use crate::types::{DocumentId, SearchResult};

/// Result currently shown to the user, tagged with its ticket
#[derive(Debug, Clone)]
pub struct AppliedSearch {
    pub ticket: u64,
    pub result: Arc<SearchResult>,
}

/// What happened to a finished search
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The search was the latest issued and is now current
    Applied(AppliedSearch),
    /// A newer search was issued while this one was running; its result
    /// (or error) was discarded
    Superseded { ticket: u64, latest: u64 },
}

/// Owns the in-flight ticket counter and the current result
///
/// Tickets are taken when a search is issued. A search whose ticket is no
/// longer the latest when it completes is discarded, so a slow earlier
/// search can never overwrite a faster later one.
pub struct SearchSession {
    orchestrator: Arc<SearchOrchestrator>,
    issued: AtomicU64,
    current: Mutex<Option<AppliedSearch>>,
}

impl SearchSession {
    pub fn new(orchestrator: Arc<SearchOrchestrator>) -> Self {
        Self {
            orchestrator,
            issued: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    pub fn orchestrator(&self) -> &SearchOrchestrator {
        &self.orchestrator
    }

    /// Ticket of the most recently issued search (0 before the first)
    pub fn latest_ticket(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Issue a search and apply its result if nothing newer was issued meanwhile
    pub async fn run(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(ticket, query, "Search issued");

        let outcome = self.orchestrator.search(query).await;

        let mut current = self.current.lock();
        let latest = self.latest_ticket();
        if ticket != latest {
            debug!(ticket, latest, "Discarding superseded search");
            return Ok(SearchOutcome::Superseded { ticket, latest });
        }

        let result = Arc::new(outcome?);
        let applied = AppliedSearch { ticket, result };
        *current = Some(applied.clone());
        Ok(SearchOutcome::Applied(applied))
    }

    /// The current result, if any search has been applied
    pub fn current(&self) -> Option<AppliedSearch> {
        self.current.lock().clone()
    }

    /// Set the explored flag of a document in the current result
    ///
    /// Returns the previous value, or `None` when there is no current result
    /// or the id is unknown. Readers holding the old `Arc` keep their copy.
    pub fn set_explored(&self, id: DocumentId, explored: bool) -> Option<bool> {
        let mut current = self.current.lock();
        let applied = current.as_mut()?;
        if !applied.result.documents.contains(id) {
            return None;
        }
        Arc::make_mut(&mut applied.result)
            .documents
            .set_explored(id, explored)
    }
}
