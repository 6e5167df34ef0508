// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result projection: the slice of results the reader has revealed so far.
//!
//! Results are revealed a page at a time ("load more" or infinite scroll).
//! The cursor starts at one page, grows by one page per [`load_more`], never
//! passes the total, and snaps back to one page whenever the filter state
//! that produced the results changes.
//!
//! [`load_more`]: ResultProjector::load_more

use serde::Serialize;

use crate::filter::FilterState;
use crate::types::Document;

/// Resolved positions plus the reveal cursor.
#[derive(Debug, Clone)]
pub struct ResultProjector {
    positions: Vec<usize>,
    page_size: usize,
    visible: usize,
    filter: Option<FilterState>,
}

impl ResultProjector {
    /// `page_size` of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            positions: Vec::new(),
            page_size,
            visible: page_size,
            filter: None,
        }
    }

    /// Install a fresh result set. The cursor resets only if `filter`
    /// differs from the one behind the previous result set.
    pub fn update(&mut self, positions: Vec<usize>, filter: &FilterState) {
        if self.filter.as_ref() != Some(filter) {
            self.visible = self.page_size;
            self.filter = Some(filter.clone());
        }
        self.positions = positions;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of results.
    pub fn total(&self) -> usize {
        self.positions.len()
    }

    /// Number of results currently revealed.
    pub fn visible_count(&self) -> usize {
        self.visible.min(self.positions.len())
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.positions.len()
    }

    /// Reveal one more page. Returns the new visible count.
    pub fn load_more(&mut self) -> usize {
        if self.has_more() {
            self.visible = (self.visible + self.page_size).min(self.positions.len());
        }
        self.visible_count()
    }

    /// All result positions, in order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Revealed result positions, in order.
    pub fn visible_positions(&self) -> &[usize] {
        &self.positions[..self.visible_count()]
    }
}

/// What the presentation layer renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection<'a> {
    pub items: Vec<&'a Document>,
    pub total: usize,
    pub has_more: bool,
}

impl<'a> Projection<'a> {
    pub fn new(projector: &ResultProjector, documents: &'a [Document]) -> Self {
        Self {
            items: projector
                .visible_positions()
                .iter()
                .filter_map(|&pos| documents.get(pos))
                .collect(),
            total: projector.total(),
            has_more: projector.has_more(),
        }
    }
}
