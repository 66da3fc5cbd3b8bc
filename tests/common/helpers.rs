// Test helper functions

use chrono::{DateTime, TimeZone, Utc};
use related_pages::core::config::Config;
use related_pages::core::registry::{IndexConfig, IndexRegistry};
use related_pages::core::services::Services;
use related_pages::core::types::ScoredResult;
use std::path::Path;
use std::sync::Arc;

/// Midnight UTC on the given day
#[allow(dead_code)] // Used in integration tests
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Registry with a single `keywords` index of weight 1
#[allow(dead_code)] // Used in integration tests
pub fn keyword_registry() -> IndexRegistry {
    IndexRegistry::from_configs([IndexConfig::new("keywords", 1.0)]).unwrap()
}

/// Create services over `content_dir` with the given indices, content loaded
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(content_dir: &Path, indices: Vec<IndexConfig>) -> Arc<Services> {
    let mut config = Config::default();
    config.content.content_dir = content_dir.to_path_buf();
    config.related.indices = indices;

    let services = Services::new(config).expect("Failed to create services");
    services.load_content().expect("Failed to load content");
    Arc::new(services)
}

/// Result ids with their scores, in ranked order
#[allow(dead_code)] // Used in integration tests
pub fn ids(results: &[ScoredResult<String>]) -> Vec<(&str, f64)> {
    results.iter().map(|r| (r.id.as_str(), r.score)).collect()
}
