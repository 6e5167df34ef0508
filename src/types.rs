// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The nouns of the engine: documents, their status, and indexed fields.
//!
//! # Invariants
//!
//! - **Document**: `id` (the slug) is unique inside a [`DocumentStore`] and
//!   never blank. `body_text` holds prose only, never the front-matter block.
//! - **Visibility**: only `Published` and `Pinned` documents reach search
//!   and browse. Drafts and unlisted posts are kept aside for tooling.
//!
//! [`DocumentStore`]: crate::store::DocumentStore

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Publication status from the `status` front-matter key.
///
/// There is no default: a post without a status is treated as a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Published,
    Draft,
    Unlisted,
    /// Visible, and always listed ahead of everything else.
    Pinned,
}

impl Status {
    /// Whether documents with this status take part in search and browse.
    pub fn is_visible(self) -> bool {
        matches!(self, Status::Published | Status::Pinned)
    }

    pub fn is_pinned(self) -> bool {
        self == Status::Pinned
    }
}

/// Cover image metadata. Carried for the presentation layer, never indexed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub credit: Option<String>,
}

/// A single article: metadata plus prose body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Slug. Unique and stable.
    pub id: String,
    pub title: String,
    pub body_text: String,
    pub author: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub tags: BTreeSet<String>,
    pub series: Option<String>,
    pub published_at: NaiveDate,
    pub updated_at: Option<NaiveDate>,
    pub status: Status,
    pub cover: Option<Cover>,
}

impl Document {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_visible(&self) -> bool {
        self.status.is_visible()
    }
}

/// Which fields an index covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndexMode {
    /// Title only. Used when the reader ticks "search titles only".
    TitleOnly,
    /// Title, body, tags and category.
    #[default]
    Full,
}

impl IndexMode {
    pub fn from_title_only(title_only: bool) -> Self {
        if title_only {
            IndexMode::TitleOnly
        } else {
            IndexMode::Full
        }
    }

    /// Indexed fields, in the order they are scored.
    pub fn fields(self) -> &'static [FieldKind] {
        match self {
            IndexMode::TitleOnly => &[FieldKind::Title],
            IndexMode::Full => &[
                FieldKind::Title,
                FieldKind::Body,
                FieldKind::Tags,
                FieldKind::Category,
            ],
        }
    }
}

/// A searchable document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Title,
    Body,
    Tags,
    Category,
}

impl FieldKind {
    /// Raw field values of a document. Tags yield one value per tag.
    pub fn values(self, doc: &Document) -> Vec<&str> {
        match self {
            FieldKind::Title => vec![doc.title.as_str()],
            FieldKind::Body => vec![doc.body_text.as_str()],
            FieldKind::Tags => doc.tags.iter().map(String::as_str).collect(),
            FieldKind::Category => vec![doc.category.as_str()],
        }
    }
}
