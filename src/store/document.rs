// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsing a raw post source into a [`Document`].
//!
//! A source is a YAML front-matter block fenced by `---` lines, followed by
//! the Markdown/MDX body:
//!
//! ```text
//! ---
//! slug: hoc-tieng-han
//! title: Học tiếng Hàn
//! date: 2024-01-01
//! status: published
//! tags: [topik]
//! ---
//! import Callout from '../components/Callout'
//!
//! Nội dung bài viết...
//! ```
//!
//! The body keeps the prose and drops MDX `import`/`export` lines, which
//! are code, not content.
//!
//! Only `slug`, `title` and `date` can reject a post. A missing or blank
//! `status` loads the post as a draft, and an unreadable `updated` date is
//! dropped with a warning.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::error::{Error, Result};
use crate::types::{Cover, Document, Status};

/// One unparsed post, as handed over by the content loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSource {
    /// Where the source came from (file path, module id). Used in logs.
    pub origin: String,
    pub contents: String,
}

impl RawSource {
    pub fn new(origin: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            contents: contents.into(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct Frontmatter {
    slug: Option<String>,
    title: Option<String>,
    date: Option<String>,
    updated: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    status: Option<Status>,
    author: Option<String>,
    category: Option<String>,
    subcategory: Option<String>,
    tags: Option<TagsValue>,
    series: Option<String>,
    cover: Option<String>,
    cover_alt: Option<String>,
    cover_caption: Option<String>,
    cover_credit: Option<String>,
}

/// `tags: topik` or `tags: [topik, anki]`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum TagsValue {
    One(String),
    Many(Vec<String>),
}

impl From<TagsValue> for Vec<String> {
    fn from(val: TagsValue) -> Self {
        match val {
            TagsValue::One(tag) => vec![tag],
            TagsValue::Many(tags) => tags,
        }
    }
}

/// `status:` with no value (or only spaces) reads the same as no key.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<Status>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let value: StrDeserializer<'_, D::Error> = value.into_deserializer();
            Status::deserialize(value).map(Some)
        }
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Split a source into its front-matter YAML and its body.
pub fn split_frontmatter(raw: &str) -> Result<(&str, &str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let mut lines = raw.split_inclusive('\n');
    let first = lines.next().ok_or(Error::MissingFrontmatter)?;
    if !is_fence(first) {
        return Err(Error::MissingFrontmatter);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_fence(line) {
            return Ok((&raw[yaml_start..offset], &raw[offset + line.len()..]));
        }
        offset += line.len();
    }
    Err(Error::MissingFrontmatter)
}

/// Prose part of a body: MDX import/export statements removed, outer
/// whitespace trimmed.
pub fn extract_body_text(body: &str) -> String {
    body.lines()
        .filter(|line| {
            let line = line.trim_start();
            !(line.starts_with("import ") || line.starts_with("export "))
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Accepts `2024-01-01`, RFC 3339 timestamps and `2024-01-01 10:00[:00]`.
/// Only the calendar date is kept.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| Error::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingField(field))
}

fn optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse one raw source. Fails when the front-matter is missing or
/// invalid, or when `slug`, `title` or `date` is absent.
pub fn parse_source(raw: &str) -> Result<Document> {
    let (yaml, body) = split_frontmatter(raw)?;
    let meta: Frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    let id = required(meta.slug, "slug")?;
    let title = required(meta.title, "title")?;
    let date = required(meta.date, "date")?;
    let published_at = parse_date("date", &date)?;
    let updated_at = optional(meta.updated).and_then(|v| match parse_date("updated", &v) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(slug = %id, error = %e, "ignoring unreadable update date");
            None
        }
    });

    let cover = optional(meta.cover).map(|src| Cover {
        src,
        alt: meta.cover_alt.unwrap_or_default(),
        caption: optional(meta.cover_caption),
        credit: optional(meta.cover_credit),
    });

    let tags: BTreeSet<String> = meta
        .tags
        .map(Vec::from)
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    Ok(Document {
        id,
        title,
        body_text: extract_body_text(body),
        author: optional(meta.author).unwrap_or_default(),
        category: optional(meta.category).unwrap_or_default(),
        subcategory: optional(meta.subcategory),
        tags,
        series: optional(meta.series),
        published_at,
        updated_at,
        status: meta.status.unwrap_or(Status::Draft),
        cover,
    })
}
