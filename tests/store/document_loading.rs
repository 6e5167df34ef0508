//! Tests for loading posts from a directory.

use crate::common::{post_source, write_post};
use postsift::{DocumentStore, Error, Status};

#[test]
fn test_load_valid_posts() {
    let dir = tempfile::tempdir().unwrap();
    write_post(
        dir.path(),
        "hoc-tieng-han.mdx",
        &post_source(
            "hoc-tieng-han",
            "Học tiếng Hàn",
            "2024-01-01",
            "tags: [topik]\nauthor: Phúc Lee\n",
            "import X from './x'\n\nNội dung.",
        ),
    );
    write_post(
        dir.path(),
        "ngu-phap.md",
        &post_source("ngu-phap", "Ngữ pháp cơ bản", "2024-02-01", "status: pinned\n", "Body"),
    );

    let store = DocumentStore::load_dir(dir.path()).unwrap();
    assert_eq!(store.len(), 2);

    let first = &store.documents()[0];
    assert_eq!(first.id, "ngu-phap");
    assert_eq!(first.status, Status::Pinned);

    let second = store.get("hoc-tieng-han").unwrap();
    assert_eq!(second.author, "Phúc Lee");
    assert!(second.has_tag("topik"));
    assert_eq!(second.body_text, "Nội dung.");
}

#[test]
fn test_malformed_posts_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "ok.mdx", &post_source("ok", "Ok", "2024-01-01", "", "Body"));
    write_post(dir.path(), "no-frontmatter.mdx", "Just text");
    write_post(dir.path(), "no-slug.mdx", "---\ntitle: No slug\ndate: 2024-01-01\n---\n");
    write_post(
        dir.path(),
        "bad-date.mdx",
        &post_source("bad-date", "Bad", "someday", "", ""),
    );
    write_post(
        dir.path(),
        "bad-status.mdx",
        &post_source("bad-status", "Bad", "2024-01-01", "status: archived\n", ""),
    );

    let store = DocumentStore::load_dir(dir.path()).unwrap();
    let ids: Vec<&str> = store.documents().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["ok"]);
}

#[test]
fn test_hidden_statuses_load_but_stay_invisible() {
    let dir = tempfile::tempdir().unwrap();
    write_post(
        dir.path(),
        "draft.mdx",
        &post_source("draft", "Draft", "2024-01-01", "status: draft\n", ""),
    );
    write_post(
        dir.path(),
        "unlisted.mdx",
        &post_source("unlisted", "Unlisted", "2024-01-01", "status: unlisted\n", ""),
    );
    write_post(dir.path(), "live.mdx", &post_source("live", "Live", "2024-01-01", "", ""));

    let store = DocumentStore::load_dir(dir.path()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.all_documents().count(), 3);
    assert!(store.get("draft").is_none());
}

#[test]
fn test_duplicate_slug_keeps_first_file() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "a.mdx", &post_source("same", "From a", "2024-01-01", "", ""));
    write_post(dir.path(), "b.mdx", &post_source("same", "From b", "2024-03-01", "", ""));

    let store = DocumentStore::load_dir(dir.path()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("same").unwrap().title, "From a");
}

#[test]
fn test_non_post_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "post.mdx", &post_source("post", "Post", "2024-01-01", "", ""));
    write_post(dir.path(), "README.txt", "not a post");
    write_post(dir.path(), "data.json", "{}");

    let store = DocumentStore::load_dir(dir.path()).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_empty_directory_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::load_dir(dir.path()).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_missing_directory_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = DocumentStore::load_dir(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("nope"));
}

#[test]
fn test_post_without_status_stays_hidden() {
    let dir = tempfile::tempdir().unwrap();
    write_post(
        dir.path(),
        "unfinished.mdx",
        "---\nslug: unfinished\ntitle: Chưa xong\ndate: 2024-01-01\n---\nBody\n",
    );
    write_post(
        dir.path(),
        "blank.mdx",
        "---\nslug: blank\ntitle: Blank\ndate: 2024-01-01\nstatus:\n---\nBody\n",
    );
    write_post(dir.path(), "live.mdx", &post_source("live", "Live", "2024-01-01", "", ""));

    let store = DocumentStore::load_dir(dir.path()).unwrap();
    let ids: Vec<&str> = store.documents().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["live"]);
    assert_eq!(store.all_documents().count(), 3);
    assert!(store
        .all_documents()
        .filter(|d| d.id != "live")
        .all(|d| d.status == Status::Draft));
}

#[test]
fn test_lenient_optional_fields_keep_the_post() {
    let dir = tempfile::tempdir().unwrap();
    write_post(
        dir.path(),
        "lenient.mdx",
        &post_source(
            "lenient",
            "Lenient",
            "2024-01-01",
            "tags: topik\nupdated: TBD\n",
            "Body",
        ),
    );

    let store = DocumentStore::load_dir(dir.path()).unwrap();
    let doc = store.get("lenient").unwrap();
    assert!(doc.has_tag("topik"));
    assert_eq!(doc.updated_at, None);
}
