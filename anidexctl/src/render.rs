//! Text and JSON output for a browse session

use std::fmt::Write as _;

use anidex_core::BrowseSession;
use anidex_model::AnimeItem;

pub const EMPTY_MESSAGE: &str =
    "No anime found. Try a different search or reset filters.";

const MISSING: &str = "N/A";

fn format_entry(out: &mut String, item: &AnimeItem) {
    let year = item
        .year
        .map(|year| year.to_string())
        .unwrap_or_else(|| MISSING.to_string());
    let rating = item
        .score
        .map(|score| score.to_string())
        .unwrap_or_else(|| MISSING.to_string());

    let _ = writeln!(out, "{}", item.title);
    let _ = writeln!(out, "  Year: {year}");
    let _ = writeln!(out, "  Rating: {rating}/10");
    let _ = writeln!(out, "  {}", item.page_url());
}

fn format_footer(out: &mut String, session: &BrowseSession) {
    let page_info = session.page_info();
    let mut page = format!("Page {}", session.current_page());
    if let Some(last) = page_info.last_visible_page {
        let _ = write!(page, " of {last}");
    }

    let prev = session
        .prev_page()
        .map(|p| format!("--page {p}"))
        .unwrap_or_else(|| "none".to_string());
    let next = session
        .next_page()
        .map(|p| format!("--page {p}"))
        .unwrap_or_else(|| "none".to_string());

    let _ = writeln!(out, "{page} | previous: {prev} | next: {next}");
}

/// Human-readable listing of what the session shows
pub fn render_text(session: &BrowseSession) -> String {
    let mut out = String::new();

    if !session.search_term().is_empty() {
        let _ = writeln!(out, "Search: {}", session.search_term());
    }
    if let Some(sort) = session.sort() {
        let _ = writeln!(out, "Sorted by {} ({})", sort.field, sort.order);
    }
    if !out.is_empty() {
        out.push('\n');
    }

    let displayed = session.displayed();
    if displayed.is_empty() {
        let _ = writeln!(out, "{EMPTY_MESSAGE}");
    } else {
        for (idx, item) in displayed.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            format_entry(&mut out, item);
        }
    }

    out.push('\n');
    format_footer(&mut out, session);
    out
}

/// The shown entries as a pretty-printed JSON array
pub fn render_json(session: &BrowseSession) -> serde_json::Result<String> {
    serde_json::to_string_pretty(session.displayed())
}
