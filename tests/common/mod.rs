// Common test utilities and fixtures

pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in unit tests but are used in integration tests
#[allow(unused_imports)]
pub use fixtures::{fixture_now, scenario_pages, TestSite};
#[allow(unused_imports)]
pub use helpers::{create_test_services, date, keyword_registry, ids};
