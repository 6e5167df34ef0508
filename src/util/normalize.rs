// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization for accent-insensitive matching.
//!
//! Both sides of a comparison go through [`normalize`], so a reader typing
//! "hoc tieng han" on a phone without a Vietnamese keyboard still lands on
//! "Học tiếng Hàn". Hangul survives intact because the decomposed jamo are
//! recomposed after the combining marks are dropped.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a string for search: strip diacritics, lowercase, collapse whitespace.
///
/// - "Học tiếng Hàn" → "hoc tieng han"
/// - "Đà Nẵng" → "da nang"
/// - "café  au   lait" → "cafe au lait"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. Lowercase, then NFD normalize (base + combining marks)
/// 2. Drop combining marks
/// 3. Fold letters that carry a stroke instead of a mark (`đ` → `d`)
/// 4. NFC recompose what is left, collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_stroke)
        .nfc()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase, `đ` folding and whitespace collapsing only.
/// Accented input will still match approximately through edit distance.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .map(fold_stroke)
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters whose "accent" is part of the glyph and survives NFD.
fn fold_stroke(c: char) -> char {
    match c {
        'đ' => 'd',
        'Đ' => 'D',
        other => other,
    }
}

/// Length in Unicode scalar values, the unit every edit distance here uses.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
