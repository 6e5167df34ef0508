//! Resolution is a pure function of (index, documents, filter state).

use crate::common::study_blog;
use postsift::testing::synthetic_corpus;
use postsift::{build_index, resolve_positions, DocumentStore, FilterState, IndexMode, SearchConfig};

#[test]
fn test_repeated_resolution_is_identical() {
    let store = DocumentStore::from_documents(synthetic_corpus(200));
    let index = build_index(store.documents(), IndexMode::Full);
    let config = SearchConfig::default();

    for query in ["anki", "hoc tieng", "grammer", "ngữ pháp topik", ""] {
        let mut filter = FilterState::new();
        filter.set_query(query);
        let first = resolve_positions(&index, store.documents(), &filter, &config);
        let second = resolve_positions(&index, store.documents(), &filter, &config);
        assert_eq!(first, second, "query {query:?} is not deterministic");
    }
}

#[test]
fn test_rebuilt_index_gives_same_results() {
    let store = study_blog();
    let config = SearchConfig::default();
    let mut filter = FilterState::new();
    filter.set_query("ngu phap");

    let a = build_index(store.documents(), IndexMode::Full);
    let b = build_index(store.documents(), IndexMode::Full);
    assert_eq!(
        resolve_positions(&a, store.documents(), &filter, &config),
        resolve_positions(&b, store.documents(), &filter, &config)
    );
}

#[test]
fn test_results_have_no_duplicates() {
    let store = DocumentStore::from_documents(synthetic_corpus(100));
    let index = build_index(store.documents(), IndexMode::Full);
    let mut filter = FilterState::new();
    filter.set_query("hoc hoc tieng");
    let positions = resolve_positions(&index, store.documents(), &filter, &SearchConfig::default());

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), positions.len());
}

#[test]
fn test_stricter_threshold_never_adds_results() {
    let store = DocumentStore::from_documents(synthetic_corpus(100));
    let index = build_index(store.documents(), IndexMode::Full);
    let mut filter = FilterState::new();
    filter.set_query("grammer korea");

    let loose = resolve_positions(&index, store.documents(), &filter, &SearchConfig::default());
    let strict_config = SearchConfig {
        threshold: 0.0,
        ..SearchConfig::default()
    };
    let strict = resolve_positions(&index, store.documents(), &filter, &strict_config);

    assert!(strict.iter().all(|pos| loose.contains(pos)));
}
