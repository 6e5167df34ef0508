// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A search session: one reader browsing one store snapshot.
//!
//! Every change goes through [`SearchSession::update`], which applies it to
//! the filter state as one atomic transition and then re-resolves. The index
//! is rebuilt only when the store snapshot or the title-only toggle changes;
//! typing and picking filters reuse it. Facets are derived once per snapshot.
//!
//! ```
//! use std::sync::Arc;
//! use postsift::{DocumentStore, RawSource, SearchConfig, SearchSession};
//!
//! let store = DocumentStore::load(vec![RawSource::new(
//!     "hello.mdx",
//!     "---\nslug: hello\ntitle: Xin chào\ndate: 2024-01-01\nstatus: published\n---\nBody",
//! )]);
//! let mut session = SearchSession::new(Arc::new(store), SearchConfig::default());
//! session.set_query("xin chao");
//! assert_eq!(session.count(), 1);
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::SearchConfig;
use crate::filter::{FilterOptions, FilterState};
use crate::index::{build_index, SearchIndex};
use crate::resolve::resolve_positions;
use crate::results::{Projection, ResultProjector};
use crate::store::DocumentStore;
use crate::types::{Document, IndexMode};

pub struct SearchSession {
    store: Arc<DocumentStore>,
    config: SearchConfig,
    filter: FilterState,
    index: SearchIndex,
    options: FilterOptions,
    projector: ResultProjector,
    index_builds: usize,
}

impl SearchSession {
    /// Start a session with an all-empty filter state.
    pub fn new(store: Arc<DocumentStore>, config: SearchConfig) -> Self {
        let filter = FilterState::new();
        let index = build_index(store.documents(), IndexMode::from_title_only(filter.title_only()));
        let options = FilterOptions::from_documents(store.documents());
        let mut session = Self {
            store,
            config,
            filter,
            index,
            options,
            projector: ResultProjector::new(config.page_size),
            index_builds: 1,
        };
        session.refresh();
        session
    }

    fn rebuild_index(&mut self) {
        let mode = IndexMode::from_title_only(self.filter.title_only());
        self.index = build_index(self.store.documents(), mode);
        self.index_builds += 1;
    }

    fn refresh(&mut self) {
        let positions =
            resolve_positions(&self.index, self.store.documents(), &self.filter, &self.config);
        debug!(results = positions.len(), "resolved filter state");
        self.projector.update(positions, &self.filter);
    }

    /// Swap in a new store snapshot. A no-op for the same snapshot.
    pub fn replace_store(&mut self, store: Arc<DocumentStore>) {
        if Arc::ptr_eq(&self.store, &store) {
            return;
        }
        self.store = store;
        self.options = FilterOptions::from_documents(self.store.documents());
        self.rebuild_index();
        self.refresh();
    }

    /// Apply one atomic change to the filter state and re-resolve.
    pub fn update(&mut self, change: impl FnOnce(&mut FilterState)) {
        let before = self.filter.clone();
        change(&mut self.filter);
        if self.filter == before {
            return;
        }
        if self.filter.title_only() != before.title_only() {
            self.rebuild_index();
        }
        self.refresh();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.update(|f| f.set_query(query));
    }

    pub fn set_title_only(&mut self, title_only: bool) {
        self.update(|f| f.set_title_only(title_only));
    }

    pub fn set_author(&mut self, author: Option<String>) {
        self.update(|f| f.set_author(author));
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.update(|f| f.set_category(category));
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        self.update(|f| f.set_tag(tag));
    }

    pub fn set_series(&mut self, series: Option<String>) {
        self.update(|f| f.set_series(series));
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        self.update(|f| f.set_date_from(date));
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        self.update(|f| f.set_date_to(date));
    }

    /// The "clear filters" action.
    pub fn clear(&mut self) {
        self.update(FilterState::clear);
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Selectable values per filter dimension over the whole store.
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Every resolved document, in order.
    pub fn results(&self) -> Vec<&Document> {
        let docs = self.store.documents();
        self.projector.positions().iter().map(|&pos| &docs[pos]).collect()
    }

    /// Resolved documents revealed so far.
    pub fn visible(&self) -> Vec<&Document> {
        let docs = self.store.documents();
        self.projector
            .visible_positions()
            .iter()
            .map(|&pos| &docs[pos])
            .collect()
    }

    pub fn count(&self) -> usize {
        self.projector.total()
    }

    pub fn has_more(&self) -> bool {
        self.projector.has_more()
    }

    /// Reveal one more page of results. Returns the new visible count.
    pub fn load_more(&mut self) -> usize {
        self.projector.load_more()
    }

    pub fn projection(&self) -> Projection<'_> {
        Projection::new(&self.projector, self.store.documents())
    }

    /// How many times an index has been built in this session.
    pub fn index_builds(&self) -> usize {
        self.index_builds
    }
}
