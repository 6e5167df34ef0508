// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the postsift command-line interface.
//!
//! Four subcommands over a directory of `.md`/`.mdx` posts: `search` runs a
//! query with filters, `facets` lists the selectable filter values, `series`
//! prints a series in reading order and `show` prints one post with its
//! neighbours. Every command can emit JSON instead of the boxed terminal view.

pub mod display;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "postsift",
    about = "Fuzzy, accent-insensitive search over a directory of blog posts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Common {
    /// Directory containing the .md/.mdx posts
    pub dir: PathBuf,

    /// Print JSON instead of the terminal view
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub common: Common,

    /// Search query (omit to list everything the filters admit)
    pub query: Option<String>,

    /// Match the query against titles only
    #[arg(long)]
    pub title_only: bool,

    /// Only posts by this author
    #[arg(long)]
    pub author: Option<String>,

    /// Only posts in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only posts carrying this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Only posts in this series
    #[arg(long)]
    pub series: Option<String>,

    /// Published on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Published on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Maximum number of results to show (defaults to one page)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Search settings as JSON (threshold, minTokenLen, pageSize, maxPositionBonus)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search posts with a fuzzy query and optional filters
    Search(SearchArgs),

    /// List authors, categories, tags, series and the date range
    Facets {
        #[command(flatten)]
        common: Common,
    },

    /// List the posts of a series, oldest first
    Series {
        #[command(flatten)]
        common: Common,

        /// Series name, exactly as written in the front-matter
        name: String,
    },

    /// Show one post and its older/newer neighbours
    Show {
        #[command(flatten)]
        common: Common,

        /// Post slug
        slug: String,
    },
}
