//! Related-to command - pages sharing explicit keywords

use crate::cli::output::{self, colors, RelatedItem};
use crate::cli::OutputFormat;
use crate::core::keyword::KeywordQuery;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the related-to command
#[derive(Args, Debug)]
pub struct RelatedToArgs {
    /// Index to match against (e.g. keywords, tags)
    #[arg(long, short = 'i')]
    pub index: String,

    /// Keyword values to look for
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Maximum number of results
    #[arg(long, short = 'k', default_value = "10")]
    pub limit: usize,
}

/// Related-to response
#[derive(Debug, Serialize)]
pub struct RelatedToResponse {
    pub index: String,
    pub keywords: Vec<String>,
    pub total_results: usize,
    pub results: Vec<RelatedItem>,
}

/// Execute the related-to command
pub fn execute(
    args: RelatedToArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = KeywordQuery::new(args.index.clone(), args.keywords.iter().map(String::as_str));
    let related = services.related_to(&query)?;
    let total_results = related.results.len();

    let output = RelatedToResponse {
        index: args.index.clone(),
        keywords: args.keywords.clone(),
        total_results,
        results: output::related_items(related.results, related.corpus.pages(), args.limit),
    };

    match format {
        OutputFormat::Human => {
            if output.total_results > 0 {
                println!(
                    "Found {} page(s) sharing keywords in '{}':\n",
                    colors::number(&output.total_results.to_string()),
                    colors::index_name(&output.index)
                );
            }
            output::print_related(
                &output.results,
                &format!(
                    "No pages share {:?} in '{}'",
                    output.keywords, output.index
                ),
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
