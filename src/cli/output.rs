//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::cli::OutputFormat;
use crate::core::document::Page;
use crate::core::types::ScoredResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for index names
    pub fn index_name(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for page paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for relatedness scores
    pub fn score(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// One related page as printed by the query commands
#[derive(Debug, Serialize)]
pub struct RelatedItem {
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub score: f64,
    pub date: DateTime<Utc>,
    pub matched: BTreeMap<String, usize>,
}

/// Convert ranked results into output items, keeping at most `limit`
///
/// Titles come from the page at each result's corpus position.
pub fn related_items(
    results: Vec<ScoredResult<String>>,
    pages: &[Page],
    limit: usize,
) -> Vec<RelatedItem> {
    results
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, r)| RelatedItem {
            rank: i + 1,
            title: pages
                .get(r.position)
                .map(|page| page.title.clone())
                .unwrap_or_default(),
            id: r.id,
            score: r.score,
            date: r.published,
            matched: r.matched,
        })
        .collect()
}

/// Print ranked related pages
pub fn print_related(items: &[RelatedItem], empty_message: &str) {
    if items.is_empty() {
        println!("{empty_message}");
        return;
    }

    for item in items {
        let matched = item
            .matched
            .iter()
            .map(|(index, count)| format!("{index}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "[{}] {} {} {}",
            colors::rank(&item.rank.to_string()),
            colors::file_path(&item.id),
            colors::score(&format_score(item.score)),
            colors::dim(&format!("({})", item.date.format("%Y-%m-%d")))
        );
        println!("    {}", item.title);
        println!("    {}", colors::dim(&format!("matched {matched}")));
    }
}

/// Format a score without a trailing `.0` for whole numbers
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{score:.0}")
    } else {
        format!("{score:.2}")
    }
}

/// Print output based on format
pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            // Human format should be handled by the caller
            // This is a fallback that just prints JSON
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
