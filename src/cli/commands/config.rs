//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::registry::IndexConfig;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the user config file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_config_file: Option<String>,
    pub content: ContentSection,
    pub related: RelatedSection,
}

#[derive(Debug, Serialize)]
pub struct ContentSection {
    pub content_dir: String,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub build_drafts: bool,
    pub build_future: bool,
    pub build_expired: bool,
}

#[derive(Debug, Serialize)]
pub struct RelatedSection {
    pub include_newer: bool,
    pub indices: Vec<IndexConfig>,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let user_config_file = if args.all {
        Config::user_config_file().map(|p| p.to_string_lossy().into_owned())
    } else {
        None
    };

    let response = ConfigResponse {
        user_config_file,
        content: ContentSection {
            content_dir: config.content.content_dir.to_string_lossy().into_owned(),
            include_patterns: config.content.include_patterns.clone(),
            exclude_patterns: config.content.exclude_patterns.clone(),
            build_drafts: config.content.build_drafts,
            build_future: config.content.build_future,
            build_expired: config.content.build_expired,
        },
        related: RelatedSection {
            include_newer: config.related.include_newer,
            indices: config.related.indices.clone(),
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            if let Some(path) = &response.user_config_file {
                println!("  user_config_file: {}", colors::file_path(path));
            }
            println!("  content:");
            println!("    content_dir: {}", response.content.content_dir);
            println!(
                "    include_patterns: {:?}",
                response.content.include_patterns
            );
            println!(
                "    exclude_patterns: {:?}",
                response.content.exclude_patterns
            );
            println!("    build_drafts: {}", response.content.build_drafts);
            println!("    build_future: {}", response.content.build_future);
            println!("    build_expired: {}", response.content.build_expired);
            println!("  related:");
            println!("    include_newer: {}", response.related.include_newer);
            println!("    indices:");
            for index in &response.related.indices {
                println!(
                    "      - {} (weight {}, low {}, high {}, to_lower {})",
                    colors::index_name(&index.name),
                    index.weight,
                    index.cardinality_threshold_low,
                    index
                        .cardinality_threshold_high
                        .map_or_else(|| "none".to_string(), |h| h.to_string()),
                    index.to_lower
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
