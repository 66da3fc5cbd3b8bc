//! related-pages CLI - related content queries over a site's content directory
//!
//! Loads every page below the content directory, builds one relatedness
//! snapshot and answers a single query against it.
//!
//! # Examples
//!
//! ```bash
//! # Pages tagged with either keyword
//! related-pages related-to --index tags rust hugo
//!
//! # Pages related to one page, older ones only
//! related-pages related post/hello.md --exclude-newer
//!
//! # Keyword frequencies of one index
//! related-pages inspect-index tags --format json
//! ```

use clap::Parser;
use related_pages::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "related_pages=debug"
    } else {
        "related_pages=info"
    };
    let filter = EnvFilter::try_from_env("RELATED_PAGES_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let json = std::env::var("RELATED_PAGES_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    // Logs go to stderr so JSON output on stdout stays parseable
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
