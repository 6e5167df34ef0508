// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching (Sellers' variant of Levenshtein).
//!
//! Same dynamic program as plain edit distance, except row zero is all
//! zeros: the pattern may start anywhere in the text for free. The last row
//! then holds, for every text position, the cheapest way to end a match
//! there.

/// Best approximate occurrence of a pattern inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// Edits needed to turn some substring of the text into the pattern.
    pub distance: usize,
    /// Character offset just past the end of that substring.
    pub end: usize,
}

impl FuzzyMatch {
    /// Approximate character offset where the match starts.
    pub fn start(&self, pattern_len: usize) -> usize {
        self.end.saturating_sub(pattern_len)
    }
}

/// Find the occurrence of `pattern` in `text` with the fewest edits, if it
/// needs at most `max` of them.
///
/// Ties go to the earliest end position. Returns as soon as an exact
/// occurrence is seen, since nothing can beat distance zero.
pub fn substring_distance(pattern: &[char], text: &[char], max: usize) -> Option<FuzzyMatch> {
    let m = pattern.len();
    if m == 0 {
        return Some(FuzzyMatch { distance: 0, end: 0 });
    }

    // Early-exit: every missing text character costs one edit
    if m > text.len() + max {
        return None;
    }

    // col[i] = edits to match pattern[..i] ending at the current text position
    let mut col: Vec<usize> = (0..=m).collect();
    let mut best = (m <= max).then_some(FuzzyMatch { distance: m, end: 0 });

    for (j, &tc) in text.iter().enumerate() {
        let mut diag = 0;
        for i in 1..=m {
            let above = col[i];
            let cost = usize::from(pattern[i - 1] != tc);
            col[i] = (diag + cost).min(above + 1).min(col[i - 1] + 1);
            diag = above;
        }

        let distance = col[m];
        if distance <= max && best.map_or(true, |b| distance < b.distance) {
            best = Some(FuzzyMatch { distance, end: j + 1 });
            if distance == 0 {
                break;
            }
        }
    }

    best
}

/// [`substring_distance`] over `&str`, with an exact-substring fast path.
pub fn find_approx(pattern: &str, text: &str, max: usize) -> Option<FuzzyMatch> {
    if let Some(byte_pos) = text.find(pattern) {
        let start = text[..byte_pos].chars().count();
        return Some(FuzzyMatch {
            distance: 0,
            end: start + pattern.chars().count(),
        });
    }
    if max == 0 {
        return None;
    }
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    substring_distance(&pattern, &text, max)
}
