// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document store: a consistent, immutable snapshot of the blog.
//!
//! Loading never fails as a whole. Malformed posts are dropped, duplicate
//! slugs keep the first occurrence, and only published or pinned posts make
//! it into the visible set, newest first. Everything downstream (index,
//! resolver, facets) works off [`DocumentStore::documents`].

pub mod document;
pub mod loader;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::types::Document;

pub use document::{parse_source, RawSource};

/// A post together with its chronological neighbours in the visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<'a> {
    /// The next older post.
    pub older: Option<&'a Document>,
    /// The next newer post.
    pub newer: Option<&'a Document>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStore {
    /// Published and pinned, newest first, ties in load order.
    visible: Vec<Document>,
    /// Drafts and unlisted posts, in load order.
    hidden: Vec<Document>,
}

impl DocumentStore {
    /// Build a store from already parsed documents.
    ///
    /// Duplicate ids: the first occurrence wins, later ones are dropped with
    /// a warning.
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut visible = Vec::new();
        let mut hidden = Vec::new();

        for doc in documents {
            if !seen.insert(doc.id.clone()) {
                warn!(id = %doc.id, "duplicate slug, keeping the first document");
                continue;
            }
            if doc.is_visible() {
                visible.push(doc);
            } else {
                hidden.push(doc);
            }
        }

        // Stable sort keeps load order among same-day posts
        visible.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        debug!(visible = visible.len(), hidden = hidden.len(), "document store ready");
        Self { visible, hidden }
    }

    /// Parse raw sources into a store, skipping malformed ones.
    pub fn load(sources: impl IntoIterator<Item = RawSource>) -> Self {
        let sources: Vec<RawSource> = sources.into_iter().collect();
        let docs = loader::parse_sources(&sources);
        let skipped = sources.len() - docs.len();
        if skipped > 0 {
            info!(skipped, "some sources were not loaded");
        }
        Self::from_documents(docs)
    }

    /// Load every `.md`/`.mdx` post in a directory.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let sources = loader::read_sources(dir.as_ref())?;
        Ok(Self::load(sources))
    }

    /// Visible documents, newest first.
    pub fn documents(&self) -> &[Document] {
        &self.visible
    }

    /// Every loaded document, including drafts and unlisted posts.
    pub fn all_documents(&self) -> impl Iterator<Item = &Document> {
        self.visible.iter().chain(self.hidden.iter())
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.visible.iter().position(|d| d.id == id)
    }

    /// Look up a visible document by slug.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.position(id).map(|pos| &self.visible[pos])
    }

    /// Visible posts of a series in reading order (oldest first).
    pub fn series(&self, name: &str) -> Vec<&Document> {
        let mut posts: Vec<&Document> = self
            .visible
            .iter()
            .filter(|d| d.series.as_deref() == Some(name))
            .collect();
        posts.sort_by_key(|d| d.published_at);
        posts
    }

    /// Older and newer neighbours of a visible post.
    pub fn neighbors(&self, id: &str) -> Option<Neighbors<'_>> {
        let pos = self.position(id)?;
        Some(Neighbors {
            older: self.visible.get(pos + 1),
            newer: pos.checked_sub(1).map(|p| &self.visible[p]),
        })
    }
}
