// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for matching and paging.
//!
//! Defaults come from the constants in [`crate::scoring`]. A JSON file can
//! override any subset of them:
//!
//! ```json
//! { "threshold": 0.3, "pageSize": 12 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scoring::{DEFAULT_PAGE_SIZE, DEFAULT_THRESHOLD, MAX_POSITION_BONUS, MIN_TOKEN_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Tolerated edits as a fraction of the query term length.
    pub threshold: f64,
    /// Query terms shorter than this (in characters) are ignored.
    pub min_token_len: usize,
    /// Results revealed initially and per `load_more`.
    pub page_size: usize,
    /// Upper bound of the bonus for matches near the start of a field.
    pub max_position_bonus: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_token_len: MIN_TOKEN_LEN,
            page_size: DEFAULT_PAGE_SIZE,
            max_position_bonus: MAX_POSITION_BONUS,
        }
    }
}

impl SearchConfig {
    /// Read and validate a JSON config. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("malformed JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidConfig(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if self.min_token_len == 0 {
            return Err(Error::InvalidConfig("minTokenLen must be at least 1".into()));
        }
        if self.page_size == 0 {
            return Err(Error::InvalidConfig("pageSize must be at least 1".into()));
        }
        if !(self.max_position_bonus.is_finite() && self.max_position_bonus >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "maxPositionBonus must be a non-negative number, got {}",
                self.max_position_bonus
            )));
        }
        Ok(())
    }
}
