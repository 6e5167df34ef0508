// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing.

use crate::util::normalize::{char_len, normalize};

/// Parse a query string into normalized, whitespace-separated terms.
///
/// Terms shorter than `min_len` characters are dropped, and repeated terms
/// are kept once so they do not count twice.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("Học  TIẾNG a", 2);
/// assert_eq!(terms, vec!["hoc", "tieng"]);
/// ```
pub fn parse_query(query: &str, min_len: usize) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in normalize(query).split(' ') {
        if char_len(term) >= min_len && !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    terms
}
