// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: normalized field text per document.
//!
//! Normalizing is the only per-document work that does not depend on the
//! query, so it happens once here and every keystroke reuses it. The index
//! is rebuilt only when the corpus or the [`IndexMode`] changes, because
//! title-only mode drops three of the four fields.
//!
//! # Invariant
//!
//! `index.docs()[i]` describes `documents[i]` of the slice it was built
//! from. Positions are the only link between the two.

use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fuzzy::{substring_distance, FuzzyMatch};
use crate::types::{Document, FieldKind, IndexMode};
use crate::util::normalize::normalize;

/// A normalized field value, kept both as a string and as the char
/// sequence the matcher walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedText {
    pub text: String,
    pub chars: Vec<char>,
}

impl IndexedText {
    fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let chars = text.chars().collect();
        Self { text, chars }
    }

    pub fn char_len(&self) -> usize {
        self.chars.len()
    }

    /// Closest occurrence of an already normalized `term` within `max` edits.
    pub fn find(&self, term: &[char], max: usize) -> Option<FuzzyMatch> {
        substring_distance(term, &self.chars, max)
    }
}

/// One indexed field of one document. Tags hold one value per tag.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedField {
    pub kind: FieldKind,
    pub values: Vec<IndexedText>,
}

/// All indexed fields of one document, in [`IndexMode::fields`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedDoc {
    pub fields: Vec<IndexedField>,
}

/// Read-only search index over a store snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchIndex {
    mode: IndexMode,
    docs: Vec<IndexedDoc>,
}

impl SearchIndex {
    pub fn mode(&self) -> IndexMode {
        self.mode
    }

    pub fn docs(&self) -> &[IndexedDoc] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

fn index_document(doc: &Document, mode: IndexMode) -> IndexedDoc {
    let fields = mode
        .fields()
        .iter()
        .map(|&kind| IndexedField {
            kind,
            values: kind
                .values(doc)
                .into_iter()
                .map(IndexedText::new)
                .filter(|value| !value.text.is_empty())
                .collect(),
        })
        .collect();
    IndexedDoc { fields }
}

/// Build an index over `documents` covering the fields of `mode`.
///
/// Cost is proportional to corpus size × field count. Under the `parallel`
/// feature documents are normalized on the rayon pool; the output is
/// identical either way.
#[instrument(skip(documents), fields(docs = documents.len()))]
pub fn build_index(documents: &[Document], mode: IndexMode) -> SearchIndex {
    #[cfg(feature = "parallel")]
    let docs: Vec<IndexedDoc> = documents
        .par_iter()
        .map(|doc| index_document(doc, mode))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let docs: Vec<IndexedDoc> = documents
        .iter()
        .map(|doc| index_document(doc, mode))
        .collect();

    debug!(docs = docs.len(), ?mode, "built search index");
    SearchIndex { mode, docs }
}
