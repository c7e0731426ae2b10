//! Synonym dictionary for query expansion

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::DictionaryError;

/// Built-in legal dictionary - each term maps to its synonyms, in display order
pub const LEGAL_SYNONYMS: &[(&str, &[&str])] = &[
    ("contrat", &["convention", "accord", "pacte"]),
    ("juridique", &["légal", "judiciaire", "juridictionnel"]),
    ("obligation", &["engagement", "devoir", "responsabilité"]),
];

/// Entry of a dictionary file
#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    term: String,
    #[serde(default)]
    synonyms: Vec<String>,
}

/// Injectable term → synonyms dictionary
///
/// Entries keep insertion order; terms are stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymDictionary {
    entries: Vec<(String, Vec<String>)>,
    /// term → position in `entries`
    lookup: HashMap<String, usize>,
}

impl SynonymDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in legal dictionary
    pub fn legal_default() -> Self {
        Self::from_entries(LEGAL_SYNONYMS.iter().map(|(term, synonyms)| {
            (
                term.to_string(),
                synonyms.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            )
        }))
    }

    /// Build a dictionary from `(term, synonyms)` pairs
    pub fn from_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, Vec<String>)>,
        T: Into<String>,
    {
        let mut dictionary = Self::new();
        for (term, synonyms) in entries {
            dictionary.insert(term, synonyms);
        }
        dictionary
    }

    /// Parse a JSON array of `{"term": ..., "synonyms": [...]}` objects
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(
            entries.into_iter().map(|e| (e.term, e.synonyms)),
        ))
    }

    /// Load a dictionary file (see [`SynonymDictionary::from_json_str`])
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Add or replace a term
    ///
    /// Replacing keeps the term's original position.
    pub fn insert(&mut self, term: impl Into<String>, synonyms: Vec<String>) {
        let term = term.into().to_lowercase();
        match self.lookup.get(&term) {
            Some(&slot) => self.entries[slot].1 = synonyms,
            None => {
                self.lookup.insert(term.clone(), self.entries.len());
                self.entries.push((term, synonyms));
            }
        }
    }

    /// Synonyms of an exact (lowercase) term
    pub fn get(&self, term: &str) -> Option<&[String]> {
        self.lookup
            .get(term)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.lookup.contains_key(term)
    }

    /// Terms in insertion order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(term, _)| term.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
