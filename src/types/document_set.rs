//! Ordered, id-keyed collection of documents

use std::collections::{HashMap, HashSet};

use serde::{Serialize, Serializer};

use super::{Document, DocumentId};
use crate::error::DocumentSetError;
use crate::relations::build_relations;

/// Ordered sequence of documents, unique by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSet {
    documents: Vec<Document>,
    /// id → position in `documents`
    index: HashMap<DocumentId, usize>,
}

impl DocumentSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and wrap a batch of documents
    ///
    /// Ids must be non-zero and unique, positions must lie in the layout
    /// space. Incoming `connections` are cleared; call
    /// [`build_relations`] to populate them.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self, DocumentSetError> {
        let mut index = HashMap::with_capacity(documents.len());
        let mut documents = documents;

        for (slot, doc) in documents.iter_mut().enumerate() {
            if doc.id == 0 {
                return Err(DocumentSetError::ZeroId);
            }
            if !doc.position().is_normalized() {
                return Err(DocumentSetError::PositionOutOfRange { id: doc.id });
            }
            if index.insert(doc.id, slot).is_some() {
                return Err(DocumentSetError::DuplicateId(doc.id));
            }
            doc.connections.clear();
        }

        Ok(Self { documents, index })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Get a document by id (O(1) lookup)
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.index.get(&id).map(|&slot| &self.documents[slot])
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.index.contains_key(&id)
    }

    /// Ids in set order
    pub fn ids(&self) -> Vec<DocumentId> {
        self.documents.iter().map(|d| d.id).collect()
    }

    /// Ids as a set, for membership filtering
    pub fn id_set(&self) -> HashSet<DocumentId> {
        self.index.keys().copied().collect()
    }

    /// Set the explored flag of a document, returning the previous value
    pub fn set_explored(&mut self, id: DocumentId, explored: bool) -> Option<bool> {
        let slot = *self.index.get(&id)?;
        let previous = self.documents[slot].explored;
        self.documents[slot].explored = explored;
        Some(previous)
    }

    /// Replace the themes of a document and recompute every connection
    ///
    /// Returns `false` if the id is unknown.
    pub fn set_themes(&mut self, id: DocumentId, themes: Vec<String>) -> bool {
        let Some(&slot) = self.index.get(&id) else {
            return false;
        };
        self.documents[slot].themes = themes;
        build_relations(self);
        true
    }

    pub(crate) fn documents_mut(&mut self) -> &mut [Document] {
        &mut self.documents
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

impl Serialize for DocumentSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.documents.serialize(serializer)
    }
}
