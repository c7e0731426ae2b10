//! Data types for the legal-research explorer
//!
//! This module contains all the core data structures used throughout the application.

mod document;
mod document_set;
mod graph;
mod result;
mod synonym;

pub use document::{Document, DocumentId, DocumentType, Position, POSITION_MAX, POSITION_MIN};
pub use document_set::DocumentSet;
pub use graph::{Edge, GraphStats, RelatedDocument, RelatedDocuments, ThemeCount, TypeCount};
pub use result::SearchResult;
pub use synonym::{SynonymEntry, SynonymMap};
