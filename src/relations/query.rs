//! Queries over an annotated document set

use std::collections::{BTreeMap, HashSet, VecDeque};

use thiserror::Error;

use super::share_theme;
use crate::types::{
    Document, DocumentId, DocumentSet, DocumentType, Edge, GraphStats, RelatedDocument,
    RelatedDocuments, ThemeCount, TypeCount,
};

/// A stored connection list disagrees with the theme rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationViolation {
    #[error("document {0} is connected to itself")]
    SelfLoop(DocumentId),

    #[error("document {from} lists {to} but {to} does not list {from}")]
    Asymmetric { from: DocumentId, to: DocumentId },

    #[error("connection {from} -> {to} does not match their themes")]
    Mismatch { from: DocumentId, to: DocumentId },
}

/// Themes two documents have in common, in the order of `a`
pub fn shared_themes(a: &Document, b: &Document) -> Vec<String> {
    let mut shared: Vec<String> = Vec::new();
    for theme in &a.themes {
        if b.themes.contains(theme) && !shared.contains(theme) {
            shared.push(theme.clone());
        }
    }
    shared
}

/// Every undirected edge once, ordered by `(source, target)`
pub fn edges(documents: &DocumentSet) -> Vec<Edge> {
    let mut edges = Vec::new();
    for doc in documents {
        for &other_id in doc.connections() {
            if other_id <= doc.id {
                continue;
            }
            if let Some(other) = documents.get(other_id) {
                edges.push(Edge {
                    source: doc.id,
                    target: other_id,
                    shared_themes: shared_themes(doc, other),
                });
            }
        }
    }
    edges.sort_by_key(|e| (e.source, e.target));
    edges
}

/// Neighbours of a document, `None` for an unknown id
pub fn related(documents: &DocumentSet, id: DocumentId) -> Option<RelatedDocuments> {
    let doc = documents.get(id)?;
    let related = doc
        .connections()
        .iter()
        .filter_map(|&other_id| documents.get(other_id))
        .map(|other| RelatedDocument {
            shared_themes: shared_themes(doc, other),
            document: other.clone(),
        })
        .collect();

    Some(RelatedDocuments {
        document: id,
        related,
    })
}

/// Connected components, each sorted, ordered by smallest id
pub fn clusters(documents: &DocumentSet) -> Vec<Vec<DocumentId>> {
    let mut visited: HashSet<DocumentId> = HashSet::new();
    let mut clusters = Vec::new();

    for doc in documents {
        if !visited.insert(doc.id) {
            continue;
        }

        let mut component = vec![doc.id];
        let mut queue = VecDeque::from([doc.id]);
        while let Some(current) = queue.pop_front() {
            let Some(current) = documents.get(current) else {
                continue;
            };
            for &next in current.connections() {
                if visited.insert(next) {
                    component.push(next);
                    queue.push_back(next);
                }
            }
        }

        component.sort_unstable();
        clusters.push(component);
    }

    clusters.sort_by_key(|c| c[0]);
    clusters
}

/// Counts per document type and theme, plus edge and explored totals
pub fn stats(documents: &DocumentSet) -> GraphStats {
    let mut type_counts: BTreeMap<DocumentType, usize> = BTreeMap::new();
    let mut theme_counts: BTreeMap<&str, usize> = BTreeMap::new();

    for doc in documents {
        *type_counts.entry(doc.doc_type).or_insert(0) += 1;
        let mut seen: HashSet<&str> = HashSet::new();
        for theme in &doc.themes {
            if seen.insert(theme.as_str()) {
                *theme_counts.entry(theme.as_str()).or_insert(0) += 1;
            }
        }
    }

    let connection_total: usize = documents.iter().map(|d| d.connections().len()).sum();

    GraphStats {
        document_count: documents.len(),
        edge_count: connection_total / 2,
        explored_count: documents.iter().filter(|d| d.explored).count(),
        document_types: type_counts
            .into_iter()
            .map(|(doc_type, count)| TypeCount { doc_type, count })
            .collect(),
        themes: theme_counts
            .into_iter()
            .map(|(theme, count)| ThemeCount {
                theme: theme.to_string(),
                count,
            })
            .collect(),
    }
}

/// Verify that the stored connections are irreflexive, symmetric and
/// exactly the theme-sharing pairs
pub fn check_relations(documents: &DocumentSet) -> Result<(), RelationViolation> {
    for doc in documents {
        for &other_id in doc.connections() {
            if other_id == doc.id {
                return Err(RelationViolation::SelfLoop(doc.id));
            }
            let Some(other) = documents.get(other_id) else {
                return Err(RelationViolation::Mismatch {
                    from: doc.id,
                    to: other_id,
                });
            };
            if !other.is_connected_to(doc.id) {
                return Err(RelationViolation::Asymmetric {
                    from: doc.id,
                    to: other_id,
                });
            }
            if !share_theme(doc, other) {
                return Err(RelationViolation::Mismatch {
                    from: doc.id,
                    to: other_id,
                });
            }
        }

        for other in documents {
            if other.id != doc.id && share_theme(doc, other) && !doc.is_connected_to(other.id) {
                return Err(RelationViolation::Mismatch {
                    from: doc.id,
                    to: other.id,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relations::build_relations;
    use crate::types::Position;

    fn make_doc(id: DocumentId, doc_type: DocumentType, themes: &[&str]) -> Document {
        Document::new(
            id,
            doc_type,
            format!("Document {}", id),
            "Conseil d'État",
            "",
            Position::new(10.0, 10.0),
        )
        .with_themes(themes.iter().copied())
    }

    fn sample_set() -> DocumentSet {
        let mut set = DocumentSet::from_documents(vec![
            make_doc(1, DocumentType::CaseLaw, &["Civil"]),
            make_doc(2, DocumentType::Code, &["Civil", "Commercial"]),
            make_doc(3, DocumentType::CaseLaw, &["Commercial"]),
            make_doc(4, DocumentType::Doctrine, &["Pénal"]),
            make_doc(5, DocumentType::Doctrine, &[]),
        ])
        .unwrap();
        build_relations(&mut set);
        set
    }

    #[test]
    fn test_edges_listed_once() {
        let edges = edges(&sample_set());
        let pairs: Vec<(DocumentId, DocumentId)> =
            edges.iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3)]);
        assert_eq!(edges[1].shared_themes, vec!["Commercial".to_string()]);
    }

    #[test]
    fn test_related() {
        let set = sample_set();
        let result = related(&set, 2).unwrap();
        let ids: Vec<DocumentId> = result.related.iter().map(|r| r.document.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(result.related[0].shared_themes, vec!["Civil".to_string()]);

        assert!(related(&set, 5).unwrap().related.is_empty());
        assert!(related(&set, 99).is_none());
    }

    #[test]
    fn test_clusters() {
        let clusters = clusters(&sample_set());
        assert_eq!(clusters, vec![vec![1, 2, 3], vec![4], vec![5]]);
    }

    #[test]
    fn test_stats() {
        let mut set = sample_set();
        set.set_explored(4, true);

        let stats = stats(&set);
        assert_eq!(stats.document_count, 5);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.explored_count, 1);
        assert_eq!(
            stats.document_types,
            vec![
                TypeCount { doc_type: DocumentType::CaseLaw, count: 2 },
                TypeCount { doc_type: DocumentType::Code, count: 1 },
                TypeCount { doc_type: DocumentType::Doctrine, count: 2 },
            ]
        );
        let civil = stats.themes.iter().find(|t| t.theme == "Civil").unwrap();
        assert_eq!(civil.count, 2);
    }

    #[test]
    fn test_check_relations_accepts_built_set() {
        assert_eq!(check_relations(&sample_set()), Ok(()));
    }

    #[test]
    fn test_check_relations_detects_stale_cache() {
        let mut set = sample_set();
        set.documents_mut()[3].themes = vec!["Civil".to_string()];
        assert!(matches!(
            check_relations(&set),
            Err(RelationViolation::Mismatch { .. })
        ));
    }

    #[test]
    fn test_check_relations_detects_asymmetry() {
        let mut set = sample_set();
        set.documents_mut()[0].connections = vec![2, 3];
        set.documents_mut()[0].themes = vec!["Civil".to_string(), "Commercial".to_string()];
        assert_eq!(
            check_relations(&set),
            Err(RelationViolation::Asymmetric { from: 1, to: 3 })
        );
    }
}
