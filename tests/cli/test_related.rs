//! Tests for the related-to and related CLI commands
//!
//! - Results in both output formats
//! - Unknown index and unknown page errors
//! - Result limits and --exclude-newer

use crate::cli::test_helpers::{blog_services, scenario_services};
use related_pages::cli::commands::related::{self, RelatedArgs};
use related_pages::cli::commands::related_to::{self, RelatedToArgs};
use related_pages::cli::OutputFormat;

fn related_to_args(index: &str, keywords: &[&str]) -> RelatedToArgs {
    RelatedToArgs {
        index: index.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        limit: 10,
    }
}

fn related_args(page: &str) -> RelatedArgs {
    RelatedArgs {
        page: page.to_string(),
        indices: Vec::new(),
        limit: 10,
        exclude_newer: false,
    }
}

#[test]
fn test_related_to_human() {
    let (services, _site) = scenario_services();

    let result = related_to::execute(
        related_to_args("keywords", &["hugo", "rocks"]),
        &services,
        OutputFormat::Human,
    );
    assert!(result.is_ok(), "related-to should succeed: {:?}", result.err());
}

#[test]
fn test_related_to_json() {
    let (services, _site) = scenario_services();

    let result = related_to::execute(
        related_to_args("keywords", &["bep"]),
        &services,
        OutputFormat::Json,
    );
    assert!(result.is_ok(), "related-to should succeed: {:?}", result.err());
}

#[test]
fn test_related_to_no_matches() {
    let (services, _site) = scenario_services();

    let result = related_to::execute(
        related_to_args("keywords", &["nothing"]),
        &services,
        OutputFormat::Human,
    );
    assert!(result.is_ok());
}

#[test]
fn test_related_to_unknown_index() {
    let (services, _site) = scenario_services();

    let result = related_to::execute(
        related_to_args("tags", &["hugo"]),
        &services,
        OutputFormat::Human,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Unknown index: tags"));
}

#[test]
fn test_related_human_and_json() {
    let (services, _site) = scenario_services();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = related::execute(related_args("post/page1.md"), &services, format);
        assert!(result.is_ok(), "related should succeed: {:?}", result.err());
    }
}

#[test]
fn test_related_unknown_page() {
    let (services, _site) = scenario_services();

    let result = related::execute(
        related_args("post/missing.md"),
        &services,
        OutputFormat::Human,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Document not found"));
}

#[test]
fn test_related_with_indices_and_limit() {
    let (services, _site) = blog_services();

    let args = RelatedArgs {
        indices: vec!["tags".to_string()],
        limit: 1,
        ..related_args("post/rust-intro.md")
    };
    let result = related::execute(args, &services, OutputFormat::Json);
    assert!(result.is_ok(), "related should succeed: {:?}", result.err());

    let args = RelatedArgs {
        indices: vec!["series".to_string()],
        ..related_args("post/rust-intro.md")
    };
    assert!(related::execute(args, &services, OutputFormat::Json).is_err());
}

#[test]
fn test_related_exclude_newer() {
    let (services, _site) = scenario_services();

    let args = RelatedArgs {
        exclude_newer: true,
        ..related_args("post/page3.md")
    };
    let result = related::execute(args, &services, OutputFormat::Human);
    assert!(result.is_ok());
}
