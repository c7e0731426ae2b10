//! Filter panel state

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::{Document, DocumentType};

/// Filter on the explored flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorationFilter {
    #[default]
    All,
    Explored,
    Unexplored,
}

/// Active filters; an empty set means "no restriction"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    pub types: BTreeSet<DocumentType>,
    pub themes: BTreeSet<String>,
    pub source: Option<String>,
    pub exploration: ExplorationFilter,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        *self == Filters::default()
    }

    /// Whether a document passes every active filter
    pub fn matches(&self, doc: &Document) -> bool {
        if !self.types.is_empty() && !self.types.contains(&doc.doc_type) {
            return false;
        }
        if !self.themes.is_empty() && !doc.themes.iter().any(|t| self.themes.contains(t)) {
            return false;
        }
        if let Some(ref source) = self.source {
            if &doc.source != source {
                return false;
            }
        }
        match self.exploration {
            ExplorationFilter::All => true,
            ExplorationFilter::Explored => doc.explored,
            ExplorationFilter::Unexplored => !doc.explored,
        }
    }

    pub(crate) fn toggle_type(&mut self, doc_type: DocumentType) {
        if !self.types.remove(&doc_type) {
            self.types.insert(doc_type);
        }
    }

    pub(crate) fn toggle_theme(&mut self, theme: String) {
        if !self.themes.remove(&theme) {
            self.themes.insert(theme);
        }
    }
}
