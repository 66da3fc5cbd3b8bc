//! Related command - pages related to one page

use crate::cli::output::{self, colors, RelatedItem};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::QueryOptions;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the related command
#[derive(Args, Debug)]
pub struct RelatedArgs {
    /// Content-relative path of the source page (e.g. post/hello.md)
    pub page: String,

    /// Restrict scoring to these indices (repeatable, default: all)
    #[arg(long = "index", short = 'i')]
    pub indices: Vec<String>,

    /// Maximum number of results
    #[arg(long, short = 'k', default_value = "10")]
    pub limit: usize,

    /// Drop pages published after the source page
    #[arg(long)]
    pub exclude_newer: bool,
}

/// Related response
#[derive(Debug, Serialize)]
pub struct RelatedResponse {
    pub page: String,
    pub title: String,
    pub indices: Vec<String>,
    pub total_results: usize,
    pub results: Vec<RelatedItem>,
}

/// Execute the related command
pub fn execute(
    args: RelatedArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = services.config.related.query_options();
    if args.exclude_newer {
        options = QueryOptions {
            include_newer: false,
        };
    }

    let related = services.related(&args.page, args.indices.as_slice(), options)?;
    let total_results = related.results.len();

    let indices = if args.indices.is_empty() {
        services.registry().names().map(str::to_string).collect()
    } else {
        args.indices.clone()
    };

    // Resolved in the corpus the query ran against
    let (page, title) = related
        .corpus
        .page(&args.page)
        .map(|source| (source.id.clone(), source.title.clone()))
        .unwrap_or_else(|| (args.page.clone(), String::new()));

    let output = RelatedResponse {
        page,
        title,
        indices,
        total_results,
        results: output::related_items(related.results, related.corpus.pages(), args.limit),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {}",
                colors::label("Related to"),
                colors::file_path(&output.page)
            );
            println!(
                "{}\n",
                colors::dim(&format!(
                    "{} | indices: {}",
                    output.title,
                    output.indices.join(", ")
                ))
            );
            output::print_related(&output.results, "No related pages found");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
