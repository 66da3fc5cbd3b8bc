//! CLI adapter for the related pages engine
//!
//! Loads a content directory, builds one relatedness snapshot and answers
//! queries against it. Depends on `core/`, never the other way round.
//!
//! # Architecture
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |     core/        |
//! | (clap adapter)   |      |  (domain logic)  |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// related-pages - Related content engine for static sites
///
/// Scores pages by the keywords they share across weighted, named indices
/// (keywords, tags, categories, ...) declared in front matter.
#[derive(Parser, Debug)]
#[command(name = "related-pages")]
#[command(author = "Gean Authors")]
#[command(version)]
#[command(about = "Related content engine for static sites", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Content directory (overrides the configured content_dir)
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find pages carrying any of the given keywords in one index
    #[command(name = "related-to")]
    RelatedTo(commands::RelatedToArgs),

    /// Find pages related to a page, by its content-relative path
    Related(commands::RelatedArgs),

    /// List registered indices with their keyword counts
    #[command(name = "list-indices")]
    ListIndices(commands::indices::ListArgs),

    /// Show the keywords of one index by document frequency
    #[command(name = "inspect-index")]
    InspectIndex(commands::indices::InspectArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  related-pages completions bash > ~/.local/share/bash-completion/completions/related-pages
    ///   zsh:   related-pages completions zsh > ~/.zfunc/_related-pages
    ///   fish:  related-pages completions fish > ~/.config/fish/completions/related-pages.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(content) = cli.content {
        config.content.content_dir = content;
    }
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config)?);

    // show-config never touches content
    if let Commands::ShowConfig(args) = cli.command {
        return commands::config::execute(args, &services, cli.format);
    }

    let stats = services.load_content()?;
    if stats.failed > 0 {
        output::print_warning(&format!(
            "{} content file(s) could not be loaded (run with --verbose for details)",
            stats.failed
        ));
    }

    // Execute command
    match cli.command {
        Commands::RelatedTo(args) => commands::related_to::execute(args, &services, cli.format),
        Commands::Related(args) => commands::related::execute(args, &services, cli.format),
        Commands::ListIndices(args) => {
            commands::indices::execute_list(args, &services, cli.format)
        }
        Commands::InspectIndex(args) => {
            commands::indices::execute_inspect(args, &services, cli.format)
        }
        Commands::ShowConfig(_) | Commands::Completions(_) => unreachable!(), // Handled above
    }
}
