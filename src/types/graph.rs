//! Relation graph views

use serde::Serialize;

use super::{Document, DocumentId, DocumentType};

/// Undirected edge between two documents, `source < target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: DocumentId,
    pub target: DocumentId,
    #[serde(rename = "sharedThemes")]
    pub shared_themes: Vec<String>,
}

/// Neighbour of a document with the themes they have in common
#[derive(Debug, Clone, Serialize)]
pub struct RelatedDocument {
    #[serde(rename = "sharedThemes")]
    pub shared_themes: Vec<String>,
    pub document: Document,
}

/// Result of a related-documents query
#[derive(Debug, Clone, Serialize)]
pub struct RelatedDocuments {
    pub document: DocumentId,
    pub related: Vec<RelatedDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeCount {
    pub theme: String,
    pub count: usize,
}

/// Graph statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    #[serde(rename = "documentCount")]
    pub document_count: usize,
    #[serde(rename = "edgeCount")]
    pub edge_count: usize,
    #[serde(rename = "exploredCount")]
    pub explored_count: usize,
    #[serde(rename = "documentTypes")]
    pub document_types: Vec<TypeCount>,
    pub themes: Vec<ThemeCount>,
}
