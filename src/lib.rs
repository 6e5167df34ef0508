// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy, diacritic-insensitive search and filtering for a blog of posts.
//!
//! Posts arrive as Markdown/MDX sources with YAML front-matter. The store
//! parses them into an immutable snapshot, the index normalizes the
//! searchable fields, and the resolver combines typo-tolerant text matching
//! with structured filters (author, category, tag, series, date range) into
//! one ordered result list with pinned posts first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   store     │────▶│    index     │────▶│   search     │
//! │ (parse,     │     │ (normalized  │     │ (fuzzy AND,  │
//! │  dedupe,    │     │  fields per  │     │  weighted    │
//! │  visible)   │     │  doc)        │     │  scores)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   filter    │────▶│   resolve    │────▶│   results    │
//! │ (state,     │     │ (text, then  │     │ (page cursor,│
//! │  options)   │     │  filters,    │     │  load more)  │
//! │             │     │  pin first)  │     │              │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            ▲
//!                     ┌──────────────┐
//!                     │   session    │
//!                     │ (index cache,│
//!                     │  updates)    │
//!                     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use postsift::{build_index, resolve, DocumentStore, FilterState, IndexMode, RawSource, SearchConfig};
//!
//! let store = DocumentStore::load(vec![
//!     RawSource::new("a.mdx", "---\nslug: a\ntitle: Học tiếng Hàn\ndate: 2024-01-01\nstatus: published\n---\n"),
//!     RawSource::new("b.mdx", "---\nslug: b\ntitle: Ngữ pháp\ndate: 2024-02-01\nstatus: published\n---\n"),
//! ]);
//! let index = build_index(store.documents(), IndexMode::Full);
//!
//! let mut filter = FilterState::new();
//! filter.set_query("hoc tieng");
//! let results = resolve(&index, store.documents(), &filter, &SearchConfig::default());
//! assert_eq!(results[0].id, "a");
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod index;
pub mod resolve;
pub mod results;
pub mod scoring;
pub mod search;
pub mod session;
pub mod store;
pub mod testing;
pub mod types;
pub mod util;

pub use config::SearchConfig;
pub use error::{Error, Result};
pub use filter::{FilterOptions, FilterState};
pub use index::{build_index, SearchIndex};
pub use resolve::{resolve, resolve_positions};
pub use results::{Projection, ResultProjector};
pub use scoring::ranking::Hit;
pub use search::fuzzy_search;
pub use session::SearchSession;
pub use store::{parse_source, DocumentStore, Neighbors, RawSource};
pub use types::{Cover, Document, FieldKind, IndexMode, Status};
pub use util::normalize::normalize;
