//! Juris Graph
//!
//! Query-term expansion and document relation graph for a legal-research
//! explorer.
//!
//! # Features
//!
//! - **Term Expansion**: lowercase query tokens mapped to synonyms from an injectable dictionary
//! - **Relation Graph**: documents sharing a theme are linked, symmetric and without self-loops
//! - **Pluggable Sources**: seeded synthetic generator or an HTTP retrieval backend
//! - **Last-Write-Wins Searches**: a slow earlier search never replaces a newer one
//! - **Reducer State**: explicit, immutable explorer state updated by actions
//!
//! # Modules
//!
//! - `types`: Core data structures (Document, DocumentSet, SynonymMap, SearchResult)
//! - `search`: Synonym dictionary and term expander
//! - `relations`: Relation graph builder and graph queries
//! - `source`: Document sources
//! - `orchestrator`: Search pipeline and search session
//! - `state`: Explorer state and reducer
//! - `export`: CSV export
//! - `api`: Axum REST API
//! - `config`: Environment configuration
//! - `validation`: Soft validation of theme tags
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use juris_graph::{SearchOrchestrator, SyntheticGenerator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let orchestrator = SearchOrchestrator::new(Arc::new(SyntheticGenerator::seeded(42)));
//!     let result = orchestrator.search("le contrat juridique").await.unwrap();
//!     println!("{} documents", result.documents.len());
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod orchestrator;
pub mod relations;
pub mod search;
pub mod source;
pub mod state;
pub mod types;
pub mod validation;

// Re-export commonly used items at crate root
pub use error::{SearchError, SourceError};
pub use orchestrator::{SearchOrchestrator, SearchOutcome, SearchSession};
pub use relations::build_relations;
pub use search::{expand, SynonymDictionary};
pub use source::{DocumentSource, HttpDocumentSource, SyntheticGenerator};
pub use types::{Document, DocumentId, DocumentSet, DocumentType, Position, SearchResult, SynonymMap};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
