// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the postsift CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. The theme comes
//! from `POSTSIFT_THEME` ("dark" or "light") when set, then from the
//! `COLORFGBG` background hint, and falls back to dark. `NO_COLOR` and
//! non-TTY stdout turn colors off entirely, so piped output stays plain.

use std::sync::OnceLock;

use postsift::{Document, FilterOptions, Status};

/// Width between the box borders.
pub const BOX_WIDTH: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg". Background 7 and above (except 8) is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    Some(if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark })
}

fn detect_theme() -> Theme {
    std::env::var("POSTSIFT_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| theme_from_colorfgbg(&v))
        })
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Visible length, ANSI escapes excluded.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border(),
        reset(),
        content,
        " ".repeat(pad),
        border(),
        reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

fn status_badge(status: Status) -> Option<String> {
    match status {
        Status::Pinned => Some(themed(YELLOW, &[BOLD], "PINNED")),
        Status::Draft => Some(themed(MAGENTA, &[], "draft")),
        Status::Unlisted => Some(themed(MAGENTA, &[], "unlisted")),
        Status::Published => None,
    }
}

/// One result line: rank, date, title and badge.
pub fn result_line(rank: usize, doc: &Document) -> String {
    let date = themed(GRAY, &[], &doc.published_at.format("%Y-%m-%d").to_string());
    let title = themed(BLUE, &[BOLD], &truncate(&doc.title, 44));
    let mut line = format!("{:>3}. {}  {}", rank, date, title);
    if let Some(badge) = status_badge(doc.status) {
        line.push(' ');
        line.push_str(&badge);
    }
    line
}

/// Second line of a result: slug, category and tags, dimmed.
pub fn result_meta(doc: &Document) -> String {
    let mut parts = vec![doc.id.clone()];
    if !doc.category.is_empty() {
        parts.push(doc.category.clone());
    }
    if !doc.tags.is_empty() {
        parts.push(doc.tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "));
    }
    let text = truncate(&parts.join(" · "), BOX_WIDTH - 6);
    format!("     {}", themed(GRAY, &[DIM], &text))
}

/// Print a result listing in a box.
pub fn print_results(label: &str, docs: &[&Document], total: usize) {
    section_top(label);
    if docs.is_empty() {
        row(&themed(GRAY, &[], " no matching posts"));
    }
    for (i, doc) in docs.iter().enumerate() {
        row(&result_line(i + 1, doc));
        row(&result_meta(doc));
    }
    if total > docs.len() {
        row(&themed(
            GRAY,
            &[DIM],
            &format!(" … {} more (raise --limit)", total - docs.len()),
        ));
    }
    section_bot();
}

fn facet_rows(name: &str, values: &[String]) {
    let header = format!(" {} ({})", themed(GREEN, &[BOLD], name), values.len());
    row(&header);
    for value in values {
        row(&format!("   {}", truncate(value, BOX_WIDTH - 4)));
    }
}

/// Print every selectable filter value.
pub fn print_facets(options: &FilterOptions) {
    section_top("FACETS");
    facet_rows("authors", &options.authors);
    facet_rows("categories", &options.categories);
    facet_rows("tags", &options.tags);
    facet_rows("series", &options.series);
    if let (Some(earliest), Some(latest)) = (options.earliest, options.latest) {
        row(&format!(
            " {} {} → {}",
            themed(GREEN, &[BOLD], "dates"),
            earliest,
            latest
        ));
    }
    section_bot();
}

/// Print one post with its metadata.
pub fn print_document(doc: &Document) {
    section_top(&truncate(&doc.title, BOX_WIDTH - 6));
    row(&format!(" slug      {}", doc.id));
    row(&format!(" published {}", doc.published_at));
    if let Some(updated) = doc.updated_at {
        row(&format!(" updated   {}", updated));
    }
    if !doc.author.is_empty() {
        row(&format!(" author    {}", doc.author));
    }
    if !doc.category.is_empty() {
        row(&format!(" category  {}", doc.category));
    }
    if let Some(ref series) = doc.series {
        row(&format!(" series    {}", series));
    }
    if !doc.tags.is_empty() {
        let tags: Vec<&str> = doc.tags.iter().map(String::as_str).collect();
        row(&format!(" tags      {}", tags.join(", ")));
    }
    if let Some(badge) = status_badge(doc.status) {
        row(&format!(" status    {}", badge));
    }
    section_bot();
}
