//! Query-term expansion

use super::SynonymDictionary;
use crate::types::SynonymMap;

/// Split a query into lowercase tokens on single spaces
///
/// Consecutive spaces yield empty tokens and punctuation is kept, so
/// `"l'acte  nul"` becomes `["l'acte", "", "nul"]`.
pub fn tokenize(query: &str) -> Vec<String> {
    query.to_lowercase().split(' ').map(str::to_string).collect()
}

/// Map every dictionary term found in the query to its synonyms
///
/// Keys follow the first occurrence of each matching token; values are
/// copied verbatim. An empty query or no match gives an empty map.
pub fn expand(query: &str, dictionary: &SynonymDictionary) -> SynonymMap {
    let mut expansion = SynonymMap::new();

    for token in tokenize(query) {
        if expansion.contains(&token) {
            continue;
        }
        if let Some(synonyms) = dictionary.get(&token) {
            expansion.insert_first(token, synonyms.to_vec());
        }
    }

    expansion
}
