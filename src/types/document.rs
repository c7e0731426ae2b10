//! Document types for the result set

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a document within one result set
pub type DocumentId = u64;

/// Lower and upper bound of the normalized layout space
pub const POSITION_MIN: f64 = 0.0;
pub const POSITION_MAX: f64 = 100.0;

/// Kind of legal document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    CaseLaw,
    Code,
    Doctrine,
}

impl DocumentType {
    /// All document types, in display order
    pub const ALL: [DocumentType; 3] = [DocumentType::CaseLaw, DocumentType::Code, DocumentType::Doctrine];

    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::CaseLaw => "case-law",
            DocumentType::Code => "code",
            DocumentType::Doctrine => "doctrine",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point in the normalized [0,100] x [0,100] layout space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates lie inside the layout space
    pub fn is_normalized(&self) -> bool {
        let range = POSITION_MIN..=POSITION_MAX;
        range.contains(&self.x) && range.contains(&self.y)
    }
}

/// Document in a search result
///
/// `connections` is derived from `themes` by the relation builder and can
/// only be written from inside the crate. `position` has no setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub title: String,
    pub source: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    position: Position,
    #[serde(default)]
    pub explored: bool,
    #[serde(default, skip_deserializing)]
    pub(crate) connections: Vec<DocumentId>,
}

impl Document {
    /// Create a document with no references, no themes and no connections
    pub fn new(
        id: DocumentId,
        doc_type: DocumentType,
        title: impl Into<String>,
        source: impl Into<String>,
        abstract_text: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id,
            doc_type,
            title: title.into(),
            source: source.into(),
            abstract_text: abstract_text.into(),
            references: Vec::new(),
            themes: Vec::new(),
            position,
            explored: false,
            connections: Vec::new(),
        }
    }

    /// Set the theme tags
    pub fn with_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes = themes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the reference codes
    pub fn with_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = references.into_iter().map(Into::into).collect();
        self
    }

    /// Set the initial explored flag
    pub fn with_explored(mut self, explored: bool) -> Self {
        self.explored = explored;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Ids of the documents sharing at least one theme with this one, ascending
    pub fn connections(&self) -> &[DocumentId] {
        &self.connections
    }

    pub fn is_connected_to(&self, other: DocumentId) -> bool {
        self.connections.binary_search(&other).is_ok()
    }
}
