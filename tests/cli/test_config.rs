//! Tests for the show-config and completions CLI commands

use crate::cli::test_helpers::scenario_services;
use clap_complete::Shell;
use related_pages::cli::commands::completions::write_completions;
use related_pages::cli::commands::config::{execute, ConfigArgs};
use related_pages::cli::OutputFormat;

#[test]
fn test_show_config_both_formats() {
    let (services, _site) = scenario_services();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        for all in [false, true] {
            let result = execute(ConfigArgs { all }, &services, format);
            assert!(result.is_ok(), "show-config should succeed: {:?}", result.err());
        }
    }
}

#[test]
fn test_completions_mention_commands() {
    let mut out = Vec::new();
    write_completions(Shell::Bash, &mut out);

    let script = String::from_utf8(out).unwrap();
    assert!(script.contains("related-pages"));
    assert!(script.contains("related-to"));
    assert!(script.contains("inspect-index"));
}
