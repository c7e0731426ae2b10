//! Integration tests for Juris Graph

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use juris_graph::export::{export_csv, ExportFormat, STANDARD_HEADER};
use juris_graph::relations::{check_relations, clusters, edges, related, stats};
use juris_graph::state::{reduce, visible_documents, visible_edges, Action, ExplorerState};
use juris_graph::{
    build_relations, expand, Document, DocumentSet, DocumentSource, DocumentType, Position,
    SearchError, SearchOrchestrator, SearchOutcome, SearchSession, SourceError, SynonymDictionary,
    SyntheticGenerator,
};

fn doc(id: u64, theme: &str) -> Document {
    Document::new(
        id,
        DocumentType::CaseLaw,
        format!("Arrêt {}", id),
        "Cour de cassation",
        format!("Résumé {}", id),
        Position::new(10.0 * id as f64 % 90.0, 50.0),
    )
    .with_themes([theme])
}

/// Returns a fixed batch after a per-query delay
struct ScriptedSource {
    delays: Vec<(&'static str, u64)>,
}

#[async_trait]
impl DocumentSource for ScriptedSource {
    async fn fetch(&self, query: &str) -> Result<Vec<Document>, SourceError> {
        let delay = self
            .delays
            .iter()
            .find(|(q, _)| *q == query)
            .map_or(0, |(_, ms)| *ms);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if query == "panne" {
            return Err(SourceError::Unavailable("backend down".to_string()));
        }
        Ok(vec![doc(1, "Civil"), doc(2, "Civil"), doc(3, "Pénal")])
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn scripted_session(delays: Vec<(&'static str, u64)>) -> Arc<SearchSession> {
    let orchestrator = SearchOrchestrator::new(Arc::new(ScriptedSource { delays }));
    Arc::new(SearchSession::new(Arc::new(orchestrator)))
}

#[test]
fn test_expansion_scenario() {
    let dictionary = SynonymDictionary::legal_default();
    let expanded = expand("le contrat juridique", &dictionary);

    let terms: Vec<&str> = expanded.terms().collect();
    assert_eq!(terms, vec!["contrat", "juridique"]);
    assert_eq!(
        expanded.get("contrat").unwrap(),
        ["convention", "accord", "pacte"]
    );
    assert_eq!(
        expanded.get("juridique").unwrap(),
        ["légal", "judiciaire", "juridictionnel"]
    );
}

#[test]
fn test_empty_query_expands_to_nothing() {
    let dictionary = SynonymDictionary::legal_default();
    assert!(expand("", &dictionary).is_empty());
}

#[test]
fn test_relation_scenario() {
    let mut set = DocumentSet::from_documents(vec![doc(1, "Civil"), doc(2, "Civil"), doc(3, "Pénal")])
        .unwrap();
    build_relations(&mut set);

    assert_eq!(set.get(1).unwrap().connections(), [2]);
    assert_eq!(set.get(2).unwrap().connections(), [1]);
    assert!(set.get(3).unwrap().connections().is_empty());

    assert_eq!(edges(&set).len(), 1);
    assert_eq!(clusters(&set), vec![vec![1, 2], vec![3]]);
    assert_eq!(check_relations(&set), Ok(()));
}

#[test]
fn test_rebuild_is_idempotent() {
    let mut set = DocumentSet::from_documents(SyntheticGenerator::seeded(9).generate("obligation")).unwrap();
    build_relations(&mut set);
    let first = set.clone();
    build_relations(&mut set);
    assert_eq!(first, set);
}

#[tokio::test]
async fn test_seeded_searches_are_reproducible() {
    let a = SearchOrchestrator::new(Arc::new(SyntheticGenerator::seeded(2024)));
    let b = SearchOrchestrator::new(Arc::new(SyntheticGenerator::seeded(2024)));

    let ra = a.search("contrat").await.unwrap();
    let rb = b.search("contrat").await.unwrap();

    assert_eq!(ra.documents, rb.documents);
    assert_eq!(ra.synonyms, rb.synonyms);
    assert_eq!(stats(&ra.documents), stats(&rb.documents));
}

#[tokio::test]
async fn test_every_connection_shares_a_theme() {
    let orchestrator = SearchOrchestrator::new(Arc::new(SyntheticGenerator::seeded(77)));
    let result = orchestrator.search("obligation").await.unwrap();

    for document in &result.documents {
        let neighbourhood = related(&result.documents, document.id).unwrap();
        for neighbour in &neighbourhood.related {
            assert_ne!(neighbour.document.id, document.id);
            assert!(!neighbour.shared_themes.is_empty());
        }
    }
}

#[tokio::test]
async fn test_slow_earlier_search_never_wins() {
    let session = scripted_session(vec![("lent", 150), ("rapide", 0)]);

    let slow = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.run("lent").await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    let fast = session.run("rapide").await.unwrap();
    let slow = slow.await.unwrap().unwrap();

    assert!(matches!(fast, SearchOutcome::Applied(_)));
    assert!(matches!(
        slow,
        SearchOutcome::Superseded { ticket: 1, latest: 2 }
    ));
    assert_eq!(session.current().unwrap().result.query, "rapide");
}

#[tokio::test]
async fn test_failed_search_keeps_previous_result() {
    let session = scripted_session(vec![]);

    session.run("contrat").await.unwrap();
    let err = session.run("panne").await.unwrap_err();

    assert!(matches!(err, SearchError::DocumentSourceFailure(_)));
    assert_eq!(err.code(), "DOCUMENT_SOURCE_FAILURE");
    assert_eq!(session.current().unwrap().result.query, "contrat");
}

#[tokio::test]
async fn test_reducer_follows_session() {
    let session = scripted_session(vec![]);
    let mut state = ExplorerState::default();

    state = reduce(state, Action::SetQuery("contrat".to_string()));
    state = reduce(state, Action::SearchStarted { ticket: 1 });
    assert!(state.loading);

    let SearchOutcome::Applied(applied) = session.run("contrat").await.unwrap() else {
        panic!("search should be applied");
    };
    state = reduce(
        state,
        Action::SearchCompleted {
            ticket: applied.ticket,
            result: applied.result,
        },
    );
    assert!(!state.loading);
    assert_eq!(visible_documents(&state).len(), 3);

    state = reduce(state, Action::ToggleTheme("Civil".to_string()));
    let visible: Vec<u64> = visible_documents(&state).iter().map(|d| d.id).collect();
    assert_eq!(visible, vec![1, 2]);
    assert_eq!(visible_edges(&state).len(), 1);

    state = reduce(state, Action::ToggleExplored(3));
    let explored = state.result.as_ref().unwrap().documents.get(3).unwrap().explored;
    assert!(explored);
    // The session's copy is untouched
    assert!(!session.current().unwrap().result.documents.get(3).unwrap().explored);
}

#[tokio::test]
async fn test_export_current_result() {
    let session = scripted_session(vec![]);
    session.run("bail, commercial").await.unwrap();

    let csv = export_csv(&session.current().unwrap().result, ExportFormat::Standard).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], STANDARD_HEADER);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "Cour de cassation,\"bail, commercial\",Résumé 1");
}

#[tokio::test]
async fn test_dictionary_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"term": "Bail", "synonyms": ["location", "louage"]}}]"#
    )
    .unwrap();

    let dictionary = SynonymDictionary::from_json_file(file.path()).unwrap();
    let orchestrator = SearchOrchestrator::builder(Arc::new(SyntheticGenerator::seeded(1)))
        .dictionary(dictionary)
        .build();

    let result = orchestrator.search("BAIL contrat").await.unwrap();
    let terms: Vec<&str> = result.synonyms.terms().collect();
    assert_eq!(terms, vec!["bail"]);
    assert_eq!(result.synonyms.get("bail").unwrap(), ["location", "louage"]);
}
