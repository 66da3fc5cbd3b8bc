//! Content loading tests
//!
//! Loads synthetic content trees through the services layer and checks
//! visibility rules, keyword normalization and end-to-end relatedness.

use crate::common::{create_test_services, fixture_now, ids, TestSite};
use related_pages::core::config::{Config, ContentConfig};
use related_pages::core::content::ContentLoader;
use related_pages::core::document::Document;
use related_pages::core::keyword::{Keyword, KeywordQuery};
use related_pages::core::registry::{IndexConfig, IndexRegistry};
use related_pages::core::services::Services;
use related_pages::core::types::QueryOptions;

fn blog_indices() -> Vec<IndexConfig> {
    vec![
        IndexConfig::new("tags", 80.0).with_to_lower(true),
        IndexConfig::new("categories", 1.0),
    ]
}

#[test]
fn test_scenario_site_end_to_end() {
    let site = TestSite::scenario();
    let services = create_test_services(site.path(), vec![IndexConfig::new("keywords", 1.0)]);

    let corpus = services.corpus();
    assert_eq!(corpus.pages().len(), 3);
    assert_eq!(corpus.snapshot().document_count(), 3);
    assert_eq!(corpus.generation(), 1);

    let related = services
        .related_to(&KeywordQuery::new("keywords", ["hugo", "rocks"]))
        .unwrap();
    assert_eq!(
        ids(&related.results),
        vec![("post/page2.md", 2.0), ("post/page1.md", 1.0)]
    );

    let related = services
        .related("post/page1.md", &[], QueryOptions::default())
        .unwrap();
    assert_eq!(
        ids(&related.results),
        vec![("post/page2.md", 1.0), ("post/page3.md", 1.0)]
    );
}

#[test]
fn test_blog_visibility_and_failures() {
    let site = TestSite::blog();
    let registry = IndexRegistry::from_configs(blog_indices()).unwrap();
    let loader = ContentLoader::new(&ContentConfig::default(), &registry)
        .unwrap()
        .with_now(fixture_now());

    let (pages, stats) = loader.load(site.path()).unwrap();

    let loaded: Vec<&str> = pages.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        loaded,
        vec![
            "post/cooking.md",
            "post/go-intro.md",
            "post/rust-async.md",
            "post/rust-intro.md"
        ]
    );
    assert_eq!(stats.files_seen, 6);
    assert_eq!(stats.hidden, 1);
    assert_eq!(stats.failed, 1);
}

#[test]
fn test_blog_drafts_when_enabled() {
    let site = TestSite::blog();
    let registry = IndexRegistry::from_configs(blog_indices()).unwrap();
    let config = ContentConfig {
        build_drafts: true,
        ..ContentConfig::default()
    };
    let loader = ContentLoader::new(&config, &registry)
        .unwrap()
        .with_now(fixture_now());

    let (pages, _) = loader.load(site.path()).unwrap();
    assert!(pages.iter().any(|p| p.id == "post/wip.md"));
}

#[test]
fn test_blog_tags_are_lowercased() {
    let site = TestSite::blog();
    let services = create_test_services(site.path(), blog_indices());

    let corpus = services.corpus();
    let intro = corpus.page("post/rust-intro.md").unwrap();
    assert_eq!(
        intro.keywords("tags"),
        vec![Keyword::from("rust"), Keyword::from("programming")]
    );
    assert_eq!(intro.keywords("categories"), vec![Keyword::from("tutorials")]);
}

#[test]
fn test_blog_related_across_indices() {
    let site = TestSite::blog();
    let services = create_test_services(site.path(), blog_indices());

    let related = services
        .related("post/rust-intro.md", &[], QueryOptions::default())
        .unwrap();
    assert_eq!(
        ids(&related.results),
        vec![("post/rust-async.md", 81.0), ("post/go-intro.md", 81.0)]
    );

    let related = services
        .related(
            "post/rust-intro.md",
            &["categories".to_string()],
            QueryOptions::default(),
        )
        .unwrap();
    assert_eq!(
        ids(&related.results),
        vec![("post/rust-async.md", 1.0), ("post/go-intro.md", 1.0)]
    );

    // The draft is not part of the corpus, so it never shows up
    let related = services
        .related_to(&KeywordQuery::new("tags", ["rust"]))
        .unwrap();
    assert!(related.results.iter().all(|r| r.id != "post/wip.md"));
    assert_eq!(related.results.len(), 2);
}

#[test]
fn test_blog_tag_queries_ignore_case_and_padding() {
    let site = TestSite::blog();
    let services = create_test_services(site.path(), blog_indices());

    let lower = services
        .related_to(&KeywordQuery::new("tags", ["rust"]))
        .unwrap();
    let mixed = services
        .related_to(&KeywordQuery::new("tags", ["Rust"]))
        .unwrap();
    let padded = services
        .related_to(&KeywordQuery::new("tags", ["  RUST "]))
        .unwrap();

    assert_eq!(lower.results.len(), 2);
    assert_eq!(ids(&mixed.results), ids(&lower.results));
    assert_eq!(ids(&padded.results), ids(&lower.results));

    // Categories keep their case
    let exact = services
        .related_to(&KeywordQuery::new("categories", ["Tutorials"]))
        .unwrap();
    assert!(exact.results.is_empty());
}

#[test]
fn test_unknown_page_is_not_found() {
    let site = TestSite::scenario();
    let services = create_test_services(site.path(), vec![IndexConfig::new("keywords", 1.0)]);

    let err = services
        .related("post/missing.md", &[], QueryOptions::default())
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_missing_content_dir_fails() {
    let site = TestSite::scenario();
    let missing = site.path().join("nope");
    let mut config = Config::default();
    config.content.content_dir = missing;

    let services = Services::new(config).unwrap();
    assert!(services.load_content().is_err());
}
