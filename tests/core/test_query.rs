//! Relatedness query tests
//!
//! Covers the three query entry points against the three-page corpus,
//! multi-index weighting and error ordering.

use crate::common::{date, ids, keyword_registry, scenario_pages};
use related_pages::core::document::Page;
use related_pages::core::error::QueryError;
use related_pages::core::index::RelatednessSnapshot;
use related_pages::core::keyword::KeywordQuery;
use related_pages::core::registry::{IndexConfig, IndexRegistry};
use related_pages::core::types::QueryOptions;

fn scenario() -> (Vec<Page>, RelatednessSnapshot<String>) {
    let pages = scenario_pages();
    let snapshot = RelatednessSnapshot::build(&pages, &keyword_registry());
    (pages, snapshot)
}

#[test]
fn test_related_to_ranks_by_shared_keywords() {
    let (_, snapshot) = scenario();

    let results = snapshot
        .related_to(&KeywordQuery::new("keywords", ["hugo", "rocks"]))
        .unwrap();

    assert_eq!(
        ids(&results),
        vec![("post/page2.md", 2.0), ("post/page1.md", 1.0)]
    );
    assert_eq!(results[0].matched.get("keywords"), Some(&2));
    assert_eq!(results[0].matched_total(), 2);
}

#[test]
fn test_related_to_ties_break_on_date() {
    let (_, snapshot) = scenario();

    let results = snapshot
        .related_to(&KeywordQuery::new("keywords", ["bep", "rocks"]))
        .unwrap();

    // Equal scores: Page 2 is newer than Page 3
    assert_eq!(
        ids(&results),
        vec![("post/page2.md", 1.0), ("post/page3.md", 1.0)]
    );
}

#[test]
fn test_related_excludes_source() {
    let (pages, snapshot) = scenario();

    let results = snapshot.related(&pages[0]).unwrap();

    assert_eq!(
        ids(&results),
        vec![("post/page2.md", 1.0), ("post/page3.md", 1.0)]
    );
    assert!(results.iter().all(|r| r.id != pages[0].id));
}

#[test]
fn test_related_indices_matches_related_for_all_indices() {
    let (pages, snapshot) = scenario();

    for page in &pages {
        let all = snapshot.related(page).unwrap();
        let named = snapshot.related_indices(page, &["keywords"]).unwrap();
        assert_eq!(all, named);
    }
}

#[test]
fn test_queries_are_idempotent() {
    let (pages, snapshot) = scenario();
    let query = KeywordQuery::new("keywords", ["hugo", "says"]);

    assert_eq!(
        snapshot.related_to(&query).unwrap(),
        snapshot.related_to(&query).unwrap()
    );
    assert_eq!(
        snapshot.related(&pages[1]).unwrap(),
        snapshot.related(&pages[1]).unwrap()
    );
}

#[test]
fn test_every_candidate_shares_a_keyword() {
    let (pages, snapshot) = scenario();

    for page in &pages {
        for result in snapshot.related(page).unwrap() {
            assert!(result.score > 0.0);
            let candidate = pages.iter().find(|p| p.id == result.id).unwrap();
            let shared = candidate.taxonomies["keywords"]
                .iter()
                .any(|k| page.taxonomies["keywords"].contains(k));
            assert!(shared, "{} shares nothing with {}", result.id, page.id);
        }
    }
}

#[test]
fn test_error_ordering() {
    let (pages, snapshot) = scenario();

    // Unknown index wins over empty criteria
    let empty: [&str; 0] = [];
    let err = snapshot
        .related_to(&KeywordQuery::new("tags", empty))
        .unwrap_err();
    assert_eq!(err, QueryError::UnknownIndex("tags".to_string()));

    let err = snapshot
        .related_to(&KeywordQuery::new("keywords", empty))
        .unwrap_err();
    assert_eq!(err, QueryError::EmptyCriteria);

    let err = snapshot
        .related_indices(&pages[0], &["keywords", "tags"])
        .unwrap_err();
    assert_eq!(err, QueryError::UnknownIndex("tags".to_string()));

    let err = snapshot.related_indices(&pages[0], &empty).unwrap_err();
    assert_eq!(err, QueryError::EmptyCriteria);
}

#[test]
fn test_no_indices_configured() {
    let pages = scenario_pages();
    let snapshot = RelatednessSnapshot::build(&pages, &IndexRegistry::new());

    assert_eq!(
        snapshot.related(&pages[0]).unwrap_err(),
        QueryError::NoIndicesConfigured
    );
}

#[test]
fn test_weighted_indices_sum_contributions() {
    let registry = IndexRegistry::from_configs([
        IndexConfig::new("keywords", 100.0),
        IndexConfig::new("tags", 80.0),
        IndexConfig::new("categories", 1.0),
    ])
    .unwrap();

    let pages = vec![
        Page::new("source.md", "Source", date(2020, 1, 10))
            .with_keywords("keywords", ["rust", "search"])
            .with_keywords("tags", ["engine"])
            .with_keywords("categories", ["dev"]),
        Page::new("both.md", "Both", date(2020, 1, 1))
            .with_keywords("keywords", ["rust"])
            .with_keywords("tags", ["engine"]),
        Page::new("keywords.md", "Keywords", date(2020, 1, 2))
            .with_keywords("keywords", ["rust", "search"]),
        Page::new("category.md", "Category", date(2020, 1, 3))
            .with_keywords("categories", ["dev"]),
    ];
    let snapshot = RelatednessSnapshot::build(&pages, &registry);

    let results = snapshot.related(&pages[0]).unwrap();
    assert_eq!(
        ids(&results),
        vec![("keywords.md", 200.0), ("both.md", 180.0), ("category.md", 1.0)]
    );
    assert_eq!(results[1].matched.get("keywords"), Some(&1));
    assert_eq!(results[1].matched.get("tags"), Some(&1));

    // Restricting to tags drops the keyword and category contributions
    let results = snapshot.related_indices(&pages[0], &["tags"]).unwrap();
    assert_eq!(ids(&results), vec![("both.md", 80.0)]);
}

#[test]
fn test_exclude_newer_candidates() {
    let (pages, snapshot) = scenario();

    // Page 2's only neighbour, Page 1, was published after it
    let options = QueryOptions {
        include_newer: false,
    };
    let results = snapshot.related_with(&pages[1], options).unwrap();
    assert!(results.is_empty());

    let results = snapshot.related_with(&pages[0], options).unwrap();
    assert_eq!(
        ids(&results),
        vec![("post/page2.md", 1.0), ("post/page3.md", 1.0)]
    );
}

#[test]
fn test_source_outside_corpus() {
    let (_, snapshot) = scenario();
    let outsider = Page::new("draft.md", "Draft", date(2017, 2, 1))
        .with_keywords("keywords", ["says"]);

    let results = snapshot.related(&outsider).unwrap();
    assert_eq!(
        ids(&results),
        vec![("post/page1.md", 1.0), ("post/page3.md", 1.0)]
    );
}
