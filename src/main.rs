// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use postsift::{Document, DocumentStore, SearchConfig, SearchSession};

mod cli;
use cli::{display, Cli, Commands};

/// Log level comes from `POSTSIFT_LOG`, then `RUST_LOG`, default `warn`.
/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("POSTSIFT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

fn load_store(dir: &std::path::Path) -> Result<DocumentStore> {
    DocumentStore::load_dir(dir).with_context(|| format!("failed to load posts from {}", dir.display()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput<'a> {
    total: usize,
    results: Vec<&'a Document>,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    post: &'a Document,
    older: Option<&'a str>,
    newer: Option<&'a str>,
}

fn run_search(args: cli::SearchArgs) -> Result<()> {
    let cli::SearchArgs {
        common,
        query,
        title_only,
        author,
        category,
        tag,
        series,
        from,
        to,
        limit,
        config,
    } = args;

    let config = match config {
        Some(path) => SearchConfig::from_json_file(&path)
            .with_context(|| format!("invalid search config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    let store = Arc::new(load_store(&common.dir)?);
    let mut session = SearchSession::new(store, config);

    session.update(|f| {
        f.set_query(query.unwrap_or_default());
        f.set_title_only(title_only);
        f.set_author(author);
        f.set_category(category);
        f.set_tag(tag);
        f.set_series(series);
        f.set_date_from(from);
        f.set_date_to(to);
    });

    let limit = limit.unwrap_or(config.page_size);
    let results = session.results();
    let shown: Vec<&Document> = results.iter().take(limit).copied().collect();

    if common.json {
        return print_json(&SearchOutput {
            total: results.len(),
            results: shown,
        });
    }

    let label = match session.filter().text_query() {
        Some(q) => format!("RESULTS FOR \"{}\"", q),
        None => "POSTS".to_string(),
    };
    display::print_results(&label, &shown, results.len());
    Ok(())
}

fn run_facets(common: cli::Common) -> Result<()> {
    let store = Arc::new(load_store(&common.dir)?);
    let session = SearchSession::new(store, SearchConfig::default());
    if common.json {
        return print_json(session.options());
    }
    display::print_facets(session.options());
    Ok(())
}

fn run_series(common: cli::Common, name: &str) -> Result<()> {
    let store = load_store(&common.dir)?;
    let posts = store.series(name);
    if posts.is_empty() {
        bail!("no published posts in series \"{}\"", name);
    }
    if common.json {
        return print_json(&posts);
    }
    display::print_results(&format!("SERIES {}", name), &posts, posts.len());
    Ok(())
}

fn run_show(common: cli::Common, slug: &str) -> Result<()> {
    let store = load_store(&common.dir)?;
    let post = store
        .get(slug)
        .with_context(|| format!("no published post with slug \"{}\"", slug))?;
    let neighbors = store.neighbors(slug);
    let older = neighbors.and_then(|n| n.older);
    let newer = neighbors.and_then(|n| n.newer);

    if common.json {
        return print_json(&ShowOutput {
            post,
            older: older.map(|d| d.id.as_str()),
            newer: newer.map(|d| d.id.as_str()),
        });
    }

    display::print_document(post);
    if let Some(doc) = newer {
        println!("  newer: {} ({})", doc.title, doc.id);
    }
    if let Some(doc) = older {
        println!("  older: {} ({})", doc.title, doc.id);
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => run_search(args),
        Commands::Facets { common } => run_facets(common),
        Commands::Series { common, name } => run_series(common, &name),
        Commands::Show { common, slug } => run_show(common, &slug),
    }
}
