// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query resolution: text search, then structured filters, then pinning.
//!
//! 1. A non-blank query runs [`fuzzy_search`]; candidates arrive best-first.
//!    A blank query takes every document in store order.
//! 2. [`FilterState::admits`] drops whatever fails a structured filter.
//! 3. Pinned documents move to the front. The partition is stable, so the
//!    relevance (or store) order survives inside both halves.
//!
//! Pure: the same index, documents and filter always give the same sequence.

use crate::config::SearchConfig;
use crate::filter::FilterState;
use crate::index::SearchIndex;
use crate::search::fuzzy_search;
use crate::types::Document;

/// Resolve to positions in `documents`. Used where the caller keeps its own
/// handle on the documents, like the session's cached results.
pub fn resolve_positions(
    index: &SearchIndex,
    documents: &[Document],
    filter: &FilterState,
    config: &SearchConfig,
) -> Vec<usize> {
    debug_assert_eq!(index.len(), documents.len(), "index built from another snapshot");

    let candidates: Vec<usize> = match filter.text_query() {
        Some(query) => fuzzy_search(index, query, config)
            .into_iter()
            .map(|hit| hit.doc)
            .filter(|&pos| pos < documents.len())
            .collect(),
        None => (0..documents.len()).collect(),
    };

    let (mut pinned, rest): (Vec<usize>, Vec<usize>) = candidates
        .into_iter()
        .filter(|&pos| filter.admits(&documents[pos]))
        .partition(|&pos| documents[pos].status.is_pinned());
    pinned.extend(rest);
    pinned
}

/// Resolve a filter state into an ordered list of documents.
///
/// Never fails: no match is an empty list.
pub fn resolve<'a>(
    index: &SearchIndex,
    documents: &'a [Document],
    filter: &FilterState,
    config: &SearchConfig,
) -> Vec<&'a Document> {
    resolve_positions(index, documents, filter, config)
        .into_iter()
        .map(|pos| &documents[pos])
        .collect()
}
