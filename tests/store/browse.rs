//! Browsing helpers: lookup by slug, series listings and neighbours.

use crate::common::study_blog;

#[test]
fn test_get_by_slug() {
    let store = study_blog();
    assert_eq!(store.get("anki-setup").unwrap().title, "Cài đặt Anki cho người mới");
    assert!(store.get("missing").is_none());
    assert!(store.get("draft-post").is_none());
}

#[test]
fn test_series_reading_order() {
    let store = study_blog();
    let series: Vec<&str> = store
        .series("Ngữ pháp sơ cấp")
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(series, vec!["grammar-1", "grammar-2"]);
}

#[test]
fn test_neighbors_follow_visible_order() {
    let store = study_blog();

    let anki = store.neighbors("anki-setup").unwrap();
    assert_eq!(anki.newer.map(|d| d.id.as_str()), Some("topik-tips"));
    assert_eq!(anki.older.map(|d| d.id.as_str()), Some("grammar-2"));

    let oldest = store.neighbors("korean-food").unwrap();
    assert!(oldest.older.is_none());
    assert_eq!(oldest.newer.map(|d| d.id.as_str()), Some("grammar-1"));
}

#[test]
fn test_visible_order_is_newest_first() {
    let store = study_blog();
    let ids: Vec<&str> = store.documents().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "pinned-guide",
            "topik-tips",
            "anki-setup",
            "grammar-2",
            "grammar-1",
            "korean-food"
        ]
    );
}
