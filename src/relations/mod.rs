//! Relation graph between documents
//!
//! Documents sharing at least one theme are linked by an undirected,
//! irreflexive relation. The builder stores it on each document as a
//! derived `connections` list; the query functions read it back as edges,
//! neighbourhoods, clusters and statistics.

mod builder;
pub mod query;

pub use builder::{build_relations, share_theme};
pub use query::{check_relations, clusters, edges, related, shared_themes, stats, RelationViolation};
