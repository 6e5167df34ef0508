// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! # Constants
//!
//! | Field    | Weight | Why this value |
//! |----------|--------|----------------|
//! | Title    | 2.0    | A title hit is the strongest signal a post is about the term |
//! | Tags     | 1.5    | Curated by the author, short, high precision |
//! | Category | 1.5    | Same as tags |
//! | Body     | 1.0    | Baseline |
//!
//! The position bonus is capped at `MAX_POSITION_BONUS`, small next to the
//! gap between an exact and a one-edit match in the same field.

use crate::types::FieldKind;

// =============================================================================
// FIELD WEIGHTS
// =============================================================================

pub const TITLE_WEIGHT: f64 = 2.0;
pub const BODY_WEIGHT: f64 = 1.0;
pub const TAGS_WEIGHT: f64 = 1.5;
pub const CATEGORY_WEIGHT: f64 = 1.5;

// =============================================================================
// MATCHING CONSTANTS
// =============================================================================

/// Tolerated edits as a fraction of the term length (0.4 → 2 edits for a 5-letter term).
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Shortest query term, in characters, that takes part in matching.
pub const MIN_TOKEN_LEN: usize = 2;

/// Maximum position bonus (matches at the start of a field get this bonus).
pub const MAX_POSITION_BONUS: f64 = 0.1;

/// Results revealed per page. Three rows of the three-column card grid.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Relative weight of a field.
pub fn field_weight(field: FieldKind) -> f64 {
    match field {
        FieldKind::Title => TITLE_WEIGHT,
        FieldKind::Body => BODY_WEIGHT,
        FieldKind::Tags => TAGS_WEIGHT,
        FieldKind::Category => CATEGORY_WEIGHT,
    }
}

/// Edit budget for a term of `term_len` characters.
///
/// The epsilon keeps `0.4 × 5` from landing at `1.9999…` and losing an edit.
pub fn max_edits(term_len: usize, threshold: f64) -> usize {
    (term_len as f64 * threshold + 1e-9).floor() as usize
}

/// 1.0 for an exact hit, falling linearly with each edit.
pub fn match_quality(distance: usize, term_len: usize) -> f64 {
    if term_len == 0 {
        return 0.0;
    }
    1.0 - (distance as f64 / term_len as f64).min(1.0)
}

/// Position bonus: matches near the start of a field score slightly higher.
///
/// Range is `[0, max_bonus]`, monotonically decreasing with the offset.
pub fn position_bonus(offset: usize, text_len: usize, max_bonus: f64) -> f64 {
    if text_len > 0 {
        max_bonus * (1.0 - (offset.min(text_len) as f64 / text_len as f64))
    } else {
        0.0
    }
}

/// Score of one term hitting one field value.
pub fn field_score(
    field: FieldKind,
    distance: usize,
    term_len: usize,
    offset: usize,
    text_len: usize,
    max_bonus: f64,
) -> f64 {
    field_weight(field) * match_quality(distance, term_len)
        + position_bonus(offset, text_len, max_bonus)
}
