// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the fallible edges of the crate.
//!
//! Searching and filtering never fail. Errors only come out of parsing a
//! single document, reading a directory, or loading a configuration file,
//! and the store turns per-document errors into a logged skip.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning raw sources or files into engine inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// Source does not open with a `---` delimited metadata block.
    #[error("document has no front-matter block")]
    MissingFrontmatter,
    /// Front-matter block is not valid YAML for a post.
    #[error("invalid front-matter: {0}")]
    InvalidFrontmatter(#[from] serde_yaml::Error),
    /// A mandatory front-matter key is absent or blank.
    #[error("missing mandatory field `{0}`")]
    MissingField(&'static str),
    /// A date field could not be parsed.
    #[error("invalid date `{value}` in field `{field}`")]
    InvalidDate { field: &'static str, value: String },
    /// Filesystem access failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Configuration file is unreadable or out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
