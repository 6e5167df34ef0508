// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning raw sources (in memory or on disk) into parsed documents.
//!
//! One bad post never blocks the others: parse failures and unreadable
//! files are logged at `warn` and skipped. Under the `parallel` feature the
//! parsing runs on rayon; results come back in input order either way.

use std::fs;
use std::path::Path;

use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::document::{parse_source, RawSource};
use crate::error::{Error, Result};
use crate::types::Document;

/// File extensions treated as posts.
pub const POST_EXTENSIONS: &[&str] = &["md", "mdx"];

fn parse_or_skip(source: &RawSource) -> Option<Document> {
    match parse_source(&source.contents) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(origin = %source.origin, error = %e, "skipping malformed document");
            None
        }
    }
}

/// Parse every source, dropping the malformed ones.
pub fn parse_sources(sources: &[RawSource]) -> Vec<Document> {
    #[cfg(feature = "parallel")]
    let parsed: Vec<Option<Document>> = sources.par_iter().map(parse_or_skip).collect();

    #[cfg(not(feature = "parallel"))]
    let parsed: Vec<Option<Document>> = sources.iter().map(parse_or_skip).collect();

    parsed.into_iter().flatten().collect()
}

fn is_post(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| POST_EXTENSIONS.contains(&ext))
}

/// Read every `.md`/`.mdx` file directly inside `dir`, sorted by file name.
///
/// Only failing to list the directory is an error. A file that cannot be
/// read is skipped like a malformed post.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn read_sources(dir: &Path) -> Result<Vec<RawSource>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_post(path))
        .collect();
    paths.sort();

    let sources: Vec<RawSource> = paths
        .into_iter()
        .filter_map(|path| match fs::read_to_string(&path) {
            Ok(contents) => Some(RawSource::new(path.display().to_string(), contents)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
                None
            }
        })
        .collect();

    info!(files = sources.len(), "read post sources");
    Ok(sources)
}
