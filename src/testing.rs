// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::store::DocumentStore;
use crate::types::{Document, Status};

/// Parse a `YYYY-MM-DD` date. Panics on bad input, tests only.
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|_| panic!("bad test date: {value}"))
}

/// Create a published test document with default fields.
///
/// Author is "Test Author", category "Notes", no body, tags or series.
pub fn make_doc(id: &str, title: &str, published: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        body_text: String::new(),
        author: "Test Author".to_string(),
        category: "Notes".to_string(),
        subcategory: None,
        tags: BTreeSet::new(),
        series: None,
        published_at: date(published),
        updated_at: None,
        status: Status::Published,
        cover: None,
    }
}

/// Create a test document with tags.
pub fn make_tagged_doc(id: &str, title: &str, published: &str, tags: &[&str]) -> Document {
    let mut doc = make_doc(id, title, published);
    doc.tags = tags.iter().map(|t| t.to_string()).collect();
    doc
}

/// The two-post blog used by the scenario tests, in load order:
///
/// - `a`: "Học tiếng Hàn", tag `topik`, published 2024-01-01
/// - `b`: "Ngữ pháp cơ bản", tag `grammar`, pinned, 2024-02-01
pub fn scenario_corpus() -> Vec<Document> {
    let a = make_tagged_doc("a", "Học tiếng Hàn", "2024-01-01", &["topik"]);
    let mut b = make_tagged_doc("b", "Ngữ pháp cơ bản", "2024-02-01", &["grammar"]);
    b.status = Status::Pinned;
    vec![a, b]
}

/// [`scenario_corpus`] loaded into a store (visible order `[b, a]`).
pub fn scenario_store() -> DocumentStore {
    DocumentStore::from_documents(scenario_corpus())
}

const WORDS: &[&str] = &[
    "học", "tiếng", "hàn", "ngữ", "pháp", "từ", "vựng", "anki", "topik", "đọc", "nghe", "viết",
    "kinh", "nghiệm", "ôn", "thi", "grammar", "korean", "flashcard", "series",
];

const CATEGORIES: &[&str] = &["Kinh nghiệm", "Ngữ pháp", "Từ vựng", "Dự án"];

/// Deterministic synthetic blog for benches and property tests.
pub fn synthetic_corpus(size: usize) -> Vec<Document> {
    let base = date("2020-01-01");
    (0..size)
        .map(|i| {
            let word = |k: usize| WORDS[(i * 7 + k * 13) % WORDS.len()];
            let title = format!("{} {} {}", word(0), word(1), word(2));
            let published = base + chrono::Duration::days((i * 3 % 1500) as i64);
            let mut doc = make_doc(&format!("post-{i}"), &title, "2020-01-01");
            doc.published_at = published;
            doc.body_text = (0..40).map(word).collect::<Vec<_>>().join(" ");
            doc.category = CATEGORIES[i % CATEGORIES.len()].to_string();
            doc.tags = [word(3).to_string(), word(5).to_string()].into();
            if i % 5 == 0 {
                doc.series = Some(format!("Series {}", i % 3));
            }
            if i % 17 == 0 {
                doc.status = Status::Pinned;
            }
            doc
        })
        .collect()
}
