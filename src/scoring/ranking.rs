// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering for fuzzy hits.
//!
//! Sort order:
//! 1. **Score**, descending
//! 2. **Store position**, ascending, so equal scores keep the input order
//!
//! The second key is what makes resolution deterministic regardless of the
//! hash map the scores were accumulated in.

use std::cmp::Ordering;

/// One document matched by a text query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Position of the document in the store's visible slice.
    pub doc: usize,
    pub score: f64,
}

/// Compare two hits for ranking. `Ordering::Less` means `a` ranks first.
pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.doc.cmp(&b.doc),
    }
}
