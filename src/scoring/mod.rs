// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A term scores `weight × quality + position bonus` in each field it hits,
//! where quality falls linearly from 1 (exact) as edits pile up. A document's
//! relevance is the sum over query terms of the best field score per term.

mod core;
pub mod ranking;

pub use core::*;
