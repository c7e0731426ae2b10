//! Shared application state for the HTTP handlers

use std::sync::Arc;

use crate::orchestrator::{AppliedSearch, SearchSession};

/// State shared by every request
pub struct AppState {
    /// The search session holding the current result
    pub session: Arc<SearchSession>,
}

impl AppState {
    pub fn new(session: Arc<SearchSession>) -> Self {
        Self { session }
    }

    /// Ticket of the latest issued search, used as the response sequence id
    pub fn current_sequence_id(&self) -> u64 {
        self.session.latest_ticket()
    }

    /// The current result, if any search has been applied
    pub fn current(&self) -> Option<AppliedSearch> {
        self.session.current()
    }
}
