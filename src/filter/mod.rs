// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filter state and the selectable values behind each filter control.
//!
//! Every dimension is independent and empty by default. Picking the value
//! that is already selected clears it again, which is how a tag chip or a
//! category link behaves when clicked twice. The free-text query is the
//! exception: it is stored exactly as typed.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Document;

/// Current selection of every filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    query: String,
    title_only: bool,
    author: Option<String>,
    category: Option<String>,
    tag: Option<String>,
    series: Option<String>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

/// Select `value`, or clear the slot when it already holds `value`.
/// Blank strings clear the slot.
fn toggle(slot: &mut Option<String>, value: Option<String>) {
    let value = value.filter(|v| !v.trim().is_empty());
    *slot = match value {
        Some(v) if slot.as_deref() == Some(v.as_str()) => None,
        other => other,
    };
}

fn toggle_date(slot: &mut Option<NaiveDate>, value: Option<NaiveDate>) {
    *slot = match value {
        Some(v) if *slot == Some(v) => None,
        other => other,
    };
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The query exactly as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Trimmed query, or `None` when it imposes no text filter.
    pub fn text_query(&self) -> Option<&str> {
        Some(self.query.trim()).filter(|q| !q.is_empty())
    }

    pub fn title_only(&self) -> bool {
        self.title_only
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn series(&self) -> Option<&str> {
        self.series.as_deref()
    }

    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_title_only(&mut self, title_only: bool) {
        self.title_only = title_only;
    }

    pub fn set_author(&mut self, author: Option<String>) {
        toggle(&mut self.author, author);
    }

    pub fn set_category(&mut self, category: Option<String>) {
        toggle(&mut self.category, category);
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        toggle(&mut self.tag, tag);
    }

    pub fn set_series(&mut self, series: Option<String>) {
        toggle(&mut self.series, series);
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        toggle_date(&mut self.date_from, date);
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        toggle_date(&mut self.date_to, date);
    }

    /// Reset every dimension to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        self.text_query().is_none()
            && !self.title_only
            && self.author.is_none()
            && self.category.is_none()
            && self.tag.is_none()
            && self.series.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Structured filters as a conjunction. The text query is not checked here.
    ///
    /// `date_to` is inclusive of the whole day.
    pub fn admits(&self, doc: &Document) -> bool {
        self.author.as_ref().map_or(true, |a| doc.author == *a)
            && self.category.as_ref().map_or(true, |c| doc.category == *c)
            && self.tag.as_ref().map_or(true, |t| doc.has_tag(t))
            && self
                .series
                .as_ref()
                .map_or(true, |s| doc.series.as_deref() == Some(s.as_str()))
            && self.date_from.map_or(true, |from| doc.published_at >= from)
            && self.date_to.map_or(true, |to| doc.published_at <= to)
    }
}

/// Selectable values per dimension, derived from the whole visible corpus.
///
/// Never narrowed by the current selection: choosing a category keeps every
/// tag on offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub series: Vec<String>,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}

impl FilterOptions {
    /// Distinct values, sorted. Blank authors and categories are skipped.
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut authors = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut tags = BTreeSet::new();
        let mut series = BTreeSet::new();

        for doc in documents {
            if !doc.author.is_empty() {
                authors.insert(doc.author.clone());
            }
            if !doc.category.is_empty() {
                categories.insert(doc.category.clone());
            }
            tags.extend(doc.tags.iter().cloned());
            if let Some(ref name) = doc.series {
                series.insert(name.clone());
            }
        }

        Self {
            authors: authors.into_iter().collect(),
            categories: categories.into_iter().collect(),
            tags: tags.into_iter().collect(),
            series: series.into_iter().collect(),
            earliest: documents.iter().map(|d| d.published_at).min(),
            latest: documents.iter().map(|d| d.published_at).max(),
        }
    }
}
