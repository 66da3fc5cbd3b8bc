//! CLI test helpers
//!
//! Provides Arc<Services> wrappers matching CLI execute() signatures.

use crate::common::{create_test_services, TestSite};
use related_pages::core::registry::IndexConfig;
use related_pages::core::services::Services;
use std::sync::Arc;

/// Services over the three-page scenario site (keep the site alive during the test)
pub fn scenario_services() -> (Arc<Services>, TestSite) {
    let site = TestSite::scenario();
    let services = create_test_services(site.path(), vec![IndexConfig::new("keywords", 1.0)]);
    (services, site)
}

/// Services over the blog site with tags and categories
pub fn blog_services() -> (Arc<Services>, TestSite) {
    let site = TestSite::blog();
    let services = create_test_services(
        site.path(),
        vec![
            IndexConfig::new("tags", 80.0)
                .with_to_lower(true)
                .with_thresholds(1, Some(2)),
            IndexConfig::new("categories", 1.0),
        ],
    );
    (services, site)
}
