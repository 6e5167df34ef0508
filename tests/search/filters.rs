//! Structured filters and their combination with the text query.

use crate::common::{date, resolve_ids, study_blog};
use postsift::FilterState;

#[test]
fn test_author_filter() {
    let store = study_blog();
    let mut filter = FilterState::new();
    filter.set_author(Some("Minh Trần".into()));
    assert_eq!(resolve_ids(&store, &filter), vec!["anki-setup", "korean-food"]);
}

#[test]
fn test_author_filter_keeps_pinned_first() {
    let store = study_blog();
    let mut filter = FilterState::new();
    filter.set_author(Some("Phúc Lee".into()));
    assert_eq!(resolve_ids(&store, &filter), vec!["pinned-guide", "topik-tips"]);
}

#[test]
fn test_category_filter_is_exact() {
    let store = study_blog();
    let mut filter = FilterState::new();
    filter.set_category(Some("Ngữ pháp".into()));
    assert_eq!(resolve_ids(&store, &filter), vec!["grammar-2", "grammar-1"]);

    filter.set_category(Some("ngu phap".into()));
    assert!(resolve_ids(&store, &filter).is_empty());
}

#[test]
fn test_series_filter() {
    let store = study_blog();
    let mut filter = FilterState::new();
    filter.set_series(Some("Ngữ pháp sơ cấp".into()));
    assert_eq!(resolve_ids(&store, &filter), vec!["grammar-2", "grammar-1"]);
}

#[test]
fn test_date_range_is_inclusive() {
    let store = study_blog();
    let mut filter = FilterState::new();
    filter.set_date_from(Some(date("2024-03-01")));
    filter.set_date_to(Some(date("2024-05-10")));
    assert_eq!(
        resolve_ids(&store, &filter),
        vec!["topik-tips", "anki-setup", "grammar-2"]
    );
}

#[test]
fn test_inverted_date_range_is_empty() {
    let store = study_blog();
    let mut filter = FilterState::new();
    filter.set_date_from(Some(date("2024-05-01")));
    filter.set_date_to(Some(date("2024-01-01")));
    assert!(resolve_ids(&store, &filter).is_empty());
}

#[test]
fn test_query_and_tag_combine() {
    let store = study_blog();
    let mut filter = FilterState::new();
    filter.set_query("flashcard");
    filter.set_tag(Some("anki".into()));
    assert_eq!(resolve_ids(&store, &filter), vec!["anki-setup"]);

    filter.set_tag(Some("grammar".into()));
    assert!(resolve_ids(&store, &filter).is_empty());
}

#[test]
fn test_conflicting_filters_are_empty() {
    let store = study_blog();
    let mut filter = FilterState::new();
    filter.set_tag(Some("anki".into()));
    filter.set_category(Some("Văn hóa".into()));
    assert!(resolve_ids(&store, &filter).is_empty());
}

#[test]
fn test_unknown_value_is_empty() {
    let store = study_blog();
    let mut filter = FilterState::new();
    filter.set_tag(Some("does-not-exist".into()));
    assert!(resolve_ids(&store, &filter).is_empty());
}

#[test]
fn test_title_only_ignores_body() {
    let store = study_blog();
    let mut filter = FilterState::new();
    filter.set_query("flashcard");
    assert_eq!(resolve_ids(&store, &filter), vec!["anki-setup"]);

    filter.set_title_only(true);
    assert!(resolve_ids(&store, &filter).is_empty());
}
