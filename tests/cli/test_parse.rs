//! Argument parsing tests
//!
//! Exercises the clap definitions without running any command.

use clap::Parser;
use related_pages::cli::{Cli, Commands, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_parse_related_to() {
    let cli = Cli::try_parse_from([
        "related-pages",
        "related-to",
        "--index",
        "tags",
        "rust",
        "hugo",
        "--limit",
        "5",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    match cli.command {
        Commands::RelatedTo(args) => {
            assert_eq!(args.index, "tags");
            assert_eq!(args.keywords, vec!["rust", "hugo"]);
            assert_eq!(args.limit, 5);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_related_to_requires_keywords() {
    let result = Cli::try_parse_from(["related-pages", "related-to", "--index", "tags"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_related_with_global_flags() {
    let cli = Cli::try_parse_from([
        "related-pages",
        "related",
        "post/a.md",
        "-i",
        "tags",
        "-i",
        "categories",
        "--exclude-newer",
        "--format",
        "json",
        "--content",
        "/srv/site/content",
        "--verbose",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.content, Some(PathBuf::from("/srv/site/content")));
    assert!(cli.verbose);
    match cli.command {
        Commands::Related(args) => {
            assert_eq!(args.page, "post/a.md");
            assert_eq!(args.indices, vec!["tags", "categories"]);
            assert!(args.exclude_newer);
            assert_eq!(args.limit, 10);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_inspect_index_defaults() {
    let cli = Cli::try_parse_from(["related-pages", "inspect-index", "tags"]).unwrap();
    match cli.command {
        Commands::InspectIndex(args) => {
            assert_eq!(args.name, "tags");
            assert_eq!(args.limit, 25);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_format() {
    let result = Cli::try_parse_from(["related-pages", "--format", "xml", "list-indices"]);
    assert!(result.is_err());
}
