//! Index commands - list registered indices and inspect one of them

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::error::QueryError;
use crate::core::registry::IndexConfig;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list-indices command
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Arguments for the inspect-index command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Index name
    pub name: String,

    /// Maximum number of keywords to show
    #[arg(long, short = 'k', default_value = "25")]
    pub limit: usize,
}

/// One registered index
#[derive(Debug, Serialize)]
pub struct IndexSummary {
    pub name: String,
    pub weight: f64,
    pub cardinality_threshold_low: usize,
    pub cardinality_threshold_high: Option<usize>,
    pub to_lower: bool,
    pub keywords: usize,
}

/// List response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub documents: usize,
    pub indices: Vec<IndexSummary>,
}

/// One keyword with its document frequency
#[derive(Debug, Serialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub documents: usize,
    /// Whether the keyword passes the index's cardinality thresholds
    pub scoring: bool,
}

/// Inspect response
#[derive(Debug, Serialize)]
pub struct InspectResponse {
    pub index: IndexSummary,
    pub total_keywords: usize,
    pub keywords: Vec<KeywordEntry>,
}

/// Execute the list-indices command
pub fn execute_list(
    _args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = services.corpus();
    let snapshot = corpus.snapshot();

    let response = ListResponse {
        documents: snapshot.document_count(),
        indices: snapshot
            .indices()
            .iter()
            .map(|index| summary(index.config(), index.keyword_count()))
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            output::print_header(&format!(
                "{} index(es) over {} page(s):",
                response.indices.len(),
                response.documents
            ));
            for index in &response.indices {
                println!(
                    "  {}  weight {}  keywords {}  {}",
                    colors::index_name(&index.name),
                    colors::number(&output::format_score(index.weight)),
                    colors::number(&index.keywords.to_string()),
                    colors::dim(&thresholds(index))
                );
            }
        }
        OutputFormat::Json => output::print_output(&response, format),
    }

    Ok(())
}

/// Execute the inspect-index command
pub fn execute_inspect(
    args: InspectArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = services.corpus();
    let index = corpus
        .snapshot()
        .index(&args.name)
        .ok_or_else(|| QueryError::UnknownIndex(args.name.clone()))?;
    let config = index.config();

    let keywords = index.keywords_by_frequency();
    let response = InspectResponse {
        index: summary(config, index.keyword_count()),
        total_keywords: keywords.len(),
        keywords: keywords
            .into_iter()
            .take(args.limit)
            .map(|(keyword, documents)| KeywordEntry {
                keyword: keyword.to_string(),
                documents,
                scoring: config.admits(documents),
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            output::print_header(&format!(
                "Index '{}' ({} keywords, {})",
                response.index.name,
                response.total_keywords,
                thresholds(&response.index)
            ));
            if response.keywords.is_empty() {
                println!("  No keywords indexed");
            }
            for entry in &response.keywords {
                let marker = if entry.scoring {
                    String::new()
                } else {
                    format!(" {}", colors::warning("(outside thresholds)"))
                };
                println!(
                    "  {:>5}  {}{}",
                    colors::number(&entry.documents.to_string()),
                    entry.keyword,
                    marker
                );
            }
            if response.total_keywords > response.keywords.len() {
                println!(
                    "  {}",
                    colors::dim(&format!(
                        "... {} more",
                        response.total_keywords - response.keywords.len()
                    ))
                );
            }
        }
        OutputFormat::Json => output::print_output(&response, format),
    }

    Ok(())
}

fn summary(config: &IndexConfig, keywords: usize) -> IndexSummary {
    IndexSummary {
        name: config.name.clone(),
        weight: config.weight,
        cardinality_threshold_low: config.cardinality_threshold_low,
        cardinality_threshold_high: config.cardinality_threshold_high,
        to_lower: config.to_lower,
        keywords,
    }
}

fn thresholds(index: &IndexSummary) -> String {
    match index.cardinality_threshold_high {
        Some(high) => format!("thresholds {}..={}", index.cardinality_threshold_low, high),
        None => format!("thresholds {}..", index.cardinality_threshold_low),
    }
}
