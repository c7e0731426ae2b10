//! Expanded query terms

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One matched token with its synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynonymEntry {
    pub term: String,
    pub synonyms: Vec<String>,
}

/// Ordered token → synonyms mapping with unique keys
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymMap {
    entries: Vec<SynonymEntry>,
}

impl SynonymMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term unless it is already present
    ///
    /// Returns `false` when the term was already mapped.
    pub fn insert_first(&mut self, term: impl Into<String>, synonyms: Vec<String>) -> bool {
        let term = term.into();
        if self.contains(&term) {
            return false;
        }
        self.entries.push(SynonymEntry { term, synonyms });
        true
    }

    pub fn get(&self, term: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.term == term)
            .map(|e| e.synonyms.as_slice())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.iter().any(|e| e.term == term)
    }

    /// Matched terms in insertion order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.term.as_str())
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SynonymMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.term, &entry.synonyms)?;
        }
        map.end()
    }
}
