//! Explorer UI state
//!
//! The whole view state lives in one [`ExplorerState`] value that only
//! changes through [`reduce`]. The expander and the relation builder never
//! touch it; search results enter through `SearchCompleted`.

mod filters;

use std::collections::HashSet;
use std::sync::Arc;

use crate::relations;
use crate::types::{Document, DocumentId, DocumentType, Edge, RelatedDocuments, SearchResult};

pub use filters::{ExplorationFilter, Filters};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Complete view state of the explorer
#[derive(Debug, Clone)]
pub struct ExplorerState {
    pub query: String,
    pub filters: Filters,
    pub dark_mode: bool,
    pub zoom: f32,
    pub selected: Option<DocumentId>,
    pub loading: bool,
    /// Ticket of the search the view is waiting for
    pub pending_ticket: Option<u64>,
    pub result: Option<Arc<SearchResult>>,
    pub error: Option<String>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: Filters::default(),
            dark_mode: false,
            zoom: DEFAULT_ZOOM,
            selected: None,
            loading: false,
            pending_ticket: None,
            result: None,
            error: None,
        }
    }
}

/// State transitions
#[derive(Debug, Clone)]
pub enum Action {
    SetQuery(String),
    SearchStarted { ticket: u64 },
    SearchCompleted { ticket: u64, result: Arc<SearchResult> },
    SearchFailed { ticket: u64, message: String },
    ToggleType(DocumentType),
    ToggleTheme(String),
    SetSource(Option<String>),
    SetExploration(ExplorationFilter),
    ClearFilters,
    ToggleDarkMode,
    ZoomIn,
    ZoomOut,
    SetZoom(f32),
    Select(Option<DocumentId>),
    SetExplored { id: DocumentId, explored: bool },
    ToggleExplored(DocumentId),
}

/// Apply one action, returning the next state
pub fn reduce(mut state: ExplorerState, action: Action) -> ExplorerState {
    match action {
        Action::SetQuery(query) => state.query = query,
        Action::SearchStarted { ticket } => {
            state.loading = true;
            state.pending_ticket = Some(ticket);
            state.error = None;
        }
        Action::SearchCompleted { ticket, result } => {
            if state.pending_ticket == Some(ticket) {
                if let Some(id) = state.selected {
                    if !result.documents.contains(id) {
                        state.selected = None;
                    }
                }
                state.result = Some(result);
                state.loading = false;
                state.pending_ticket = None;
            }
        }
        Action::SearchFailed { ticket, message } => {
            if state.pending_ticket == Some(ticket) {
                state.error = Some(message);
                state.loading = false;
                state.pending_ticket = None;
            }
        }
        Action::ToggleType(doc_type) => state.filters.toggle_type(doc_type),
        Action::ToggleTheme(theme) => state.filters.toggle_theme(theme),
        Action::SetSource(source) => state.filters.source = source,
        Action::SetExploration(exploration) => state.filters.exploration = exploration,
        Action::ClearFilters => state.filters = Filters::default(),
        Action::ToggleDarkMode => state.dark_mode = !state.dark_mode,
        Action::ZoomIn => state.zoom = clamp_zoom(state.zoom + ZOOM_STEP),
        Action::ZoomOut => state.zoom = clamp_zoom(state.zoom - ZOOM_STEP),
        Action::SetZoom(zoom) => {
            if zoom.is_finite() {
                state.zoom = clamp_zoom(zoom);
            }
        }
        Action::Select(selection) => match selection {
            Some(id) if !has_document(&state, id) => {}
            _ => state.selected = selection,
        },
        Action::SetExplored { id, explored } => set_explored(&mut state, id, |_| explored),
        Action::ToggleExplored(id) => set_explored(&mut state, id, |current| !current),
    }
    state
}

fn clamp_zoom(zoom: f32) -> f32 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

fn has_document(state: &ExplorerState, id: DocumentId) -> bool {
    state
        .result
        .as_ref()
        .map_or(false, |result| result.documents.contains(id))
}

fn set_explored(state: &mut ExplorerState, id: DocumentId, next: impl FnOnce(bool) -> bool) {
    let Some(result) = state.result.as_mut() else {
        return;
    };
    let Some(current) = result.documents.get(id).map(|d| d.explored) else {
        return;
    };
    Arc::make_mut(result).documents.set_explored(id, next(current));
}

/// Documents passing the active filters, in result order
pub fn visible_documents(state: &ExplorerState) -> Vec<&Document> {
    match state.result {
        Some(ref result) => result
            .documents
            .iter()
            .filter(|doc| state.filters.matches(doc))
            .collect(),
        None => Vec::new(),
    }
}

/// Edges whose two endpoints are both visible
pub fn visible_edges(state: &ExplorerState) -> Vec<Edge> {
    let Some(ref result) = state.result else {
        return Vec::new();
    };
    let visible: HashSet<DocumentId> = visible_documents(state).iter().map(|d| d.id).collect();
    relations::edges(&result.documents)
        .into_iter()
        .filter(|e| visible.contains(&e.source) && visible.contains(&e.target))
        .collect()
}

pub fn selected_document(state: &ExplorerState) -> Option<&Document> {
    let id = state.selected?;
    state.result.as_ref()?.documents.get(id)
}

/// Neighbours of the selected document
pub fn selected_related(state: &ExplorerState) -> Option<RelatedDocuments> {
    let id = state.selected?;
    relations::related(&state.result.as_ref()?.documents, id)
}
