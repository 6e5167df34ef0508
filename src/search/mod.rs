// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy text search over a built [`SearchIndex`].
//!
//! Every query term must land in some indexed field of a document (AND
//! semantics). Per term, the best-scoring field counts; per document, the
//! term scores add up. Terms shorter than the configured minimum are dropped
//! before any of this happens.

pub mod utils;

use crate::config::SearchConfig;
use crate::index::{IndexedDoc, SearchIndex};
use crate::scoring::ranking::{compare_hits, Hit};
use crate::scoring::{field_score, max_edits};

use utils::parse_query;

/// A parsed query term with its edit budget worked out once per query.
struct Term {
    chars: Vec<char>,
    budget: usize,
}

/// Best score a single term earns anywhere in a document.
fn best_term_score(doc: &IndexedDoc, term: &Term, config: &SearchConfig) -> Option<f64> {
    let term_len = term.chars.len();

    doc.fields
        .iter()
        .flat_map(|field| field.values.iter().map(move |value| (field.kind, value)))
        .filter_map(|(kind, value)| {
            value.find(&term.chars, term.budget).map(|found| {
                field_score(
                    kind,
                    found.distance,
                    term_len,
                    found.start(term_len),
                    value.char_len(),
                    config.max_position_bonus,
                )
            })
        })
        .max_by(|a, b| a.total_cmp(b))
}

/// Run a text query against the index.
///
/// Returns hits ordered best-first, ties in index order. A query with no
/// usable terms (blank, or only terms under `min_token_len` characters)
/// matches nothing.
pub fn fuzzy_search(index: &SearchIndex, query: &str, config: &SearchConfig) -> Vec<Hit> {
    let terms: Vec<Term> = parse_query(query, config.min_token_len)
        .into_iter()
        .map(|term| {
            let chars: Vec<char> = term.chars().collect();
            let budget = max_edits(chars.len(), config.threshold);
            Term { chars, budget }
        })
        .collect();
    if terms.is_empty() {
        return Vec::new();
    }

    // Summing Options stops at the first term the document misses
    let mut hits: Vec<Hit> = index
        .docs()
        .iter()
        .enumerate()
        .filter_map(|(doc, indexed)| {
            terms
                .iter()
                .map(|term| best_term_score(indexed, term, config))
                .sum::<Option<f64>>()
                .map(|score| Hit { doc, score })
        })
        .collect();
    hits.sort_by(compare_hits);
    hits
}
