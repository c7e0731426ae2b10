//! Query expansion with an injectable synonym dictionary
//!
//! This module provides:
//! - `SynonymDictionary`: ordered term → synonyms mapping, built-in or loaded from JSON
//! - `expand`: lowercase/split the query and collect the synonyms of matching tokens

mod expander;
mod synonyms;

pub use expander::{expand, tokenize};
pub use synonyms::{SynonymDictionary, LEGAL_SYNONYMS};
