//! Relation graph construction
//!
//! Two documents are connected iff their theme lists intersect. Documents
//! are grouped by theme first, so the cost is O(N + E) instead of the
//! pairwise O(N²) while producing the same adjacency.

use std::collections::{BTreeSet, HashMap};

use rayon::prelude::*;

use crate::types::{Document, DocumentId, DocumentSet};

/// Threshold for collecting neighbours in parallel (document count)
const PARALLEL_BUILD_THRESHOLD: usize = 1000;

/// Whether two documents have at least one theme in common
pub fn share_theme(a: &Document, b: &Document) -> bool {
    a.themes.iter().any(|theme| b.themes.contains(theme))
}

/// Populate (or overwrite) the `connections` of every document in the set
///
/// Only `connections` is written. Running it twice gives the same result.
pub fn build_relations(documents: &mut DocumentSet) {
    let connections: Vec<Vec<DocumentId>> = {
        let docs = documents.documents();
        let groups = group_by_theme(docs);

        if docs.len() > PARALLEL_BUILD_THRESHOLD {
            docs.par_iter().map(|doc| neighbours(doc, &groups)).collect()
        } else {
            docs.iter().map(|doc| neighbours(doc, &groups)).collect()
        }
    };

    for (doc, ids) in documents.documents_mut().iter_mut().zip(connections) {
        doc.connections = ids;
    }
}

/// theme → ids of the documents tagged with it
fn group_by_theme(docs: &[Document]) -> HashMap<&str, Vec<DocumentId>> {
    let mut groups: HashMap<&str, Vec<DocumentId>> = HashMap::new();
    for doc in docs {
        for theme in &doc.themes {
            groups.entry(theme.as_str()).or_default().push(doc.id);
        }
    }
    groups
}

/// Sorted, deduplicated neighbours of one document, excluding itself
fn neighbours(doc: &Document, groups: &HashMap<&str, Vec<DocumentId>>) -> Vec<DocumentId> {
    let mut ids = BTreeSet::new();
    for theme in &doc.themes {
        if let Some(members) = groups.get(theme.as_str()) {
            ids.extend(members.iter().copied().filter(|&id| id != doc.id));
        }
    }
    ids.into_iter().collect()
}
