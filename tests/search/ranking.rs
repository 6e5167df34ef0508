//! Relevance ordering: field weights, edit distance, ties and pinning.

use crate::common::{make_doc, query_ids, study_blog};
use postsift::{DocumentStore, Status};

#[test]
fn test_title_match_outranks_body_match() {
    let mut newer = make_doc("body-hit", "Ghi chú hằng ngày", "2024-05-01");
    newer.body_text = "Dùng anki mỗi ngày".to_string();
    let older = make_doc("title-hit", "Anki nâng cao", "2024-01-01");
    let store = DocumentStore::from_documents(vec![newer, older]);

    assert_eq!(query_ids(&store, "anki"), vec!["title-hit", "body-hit"]);
}

#[test]
fn test_exact_match_outranks_typo() {
    let typo = make_doc("typo", "Tpoik", "2024-05-01");
    let exact = make_doc("exact", "Topik", "2024-01-01");
    let store = DocumentStore::from_documents(vec![typo, exact]);

    assert_eq!(query_ids(&store, "topik"), vec!["exact", "typo"]);
}

#[test]
fn test_equal_scores_keep_store_order() {
    let store = DocumentStore::from_documents(vec![
        make_doc("older", "Anki", "2024-01-01"),
        make_doc("newer", "Anki", "2024-03-01"),
    ]);
    assert_eq!(query_ids(&store, "anki"), vec!["newer", "older"]);
}

#[test]
fn test_pinned_match_comes_first_even_if_weaker() {
    let strong = make_doc("strong", "Anki", "2024-03-01");
    let mut weak = make_doc("weak", "Notes", "2024-01-01");
    weak.body_text = "Một chút về anki".to_string();
    weak.status = Status::Pinned;
    let store = DocumentStore::from_documents(vec![strong, weak]);

    assert_eq!(query_ids(&store, "anki"), vec!["weak", "strong"]);
}

#[test]
fn test_all_terms_must_match() {
    let store = study_blog();
    assert_eq!(query_ids(&store, "anki"), vec!["anki-setup"]);
    assert_eq!(query_ids(&store, "topik"), vec!["topik-tips"]);
    assert!(query_ids(&store, "anki topik").is_empty());
}

#[test]
fn test_single_character_terms_are_ignored() {
    let store = study_blog();
    assert_eq!(
        query_ids(&store, "ngu phap 2"),
        query_ids(&store, "ngu phap")
    );
}

#[test]
fn test_repeated_terms_count_once() {
    let store = study_blog();
    assert_eq!(query_ids(&store, "anki anki"), query_ids(&store, "anki"));
}
