// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! A query term is compared against every substring of a field, not the
//! whole field, so "tieng" finds "hoc tieng han" at distance zero and
//! "tiemg" finds it at distance one.

mod levenshtein;

pub use levenshtein::*;
