//! Content directory adapter.
//!
//! Turns a Hugo-style content tree into [`Page`](crate::core::document::Page)
//! documents for the engine:
//!
//! - **walker**: sorted, glob-filtered traversal
//! - **front_matter**: `+++` TOML front matter parsing
//! - **loader**: visibility policy and keyword normalization

pub mod front_matter;
pub mod loader;
pub mod walker;

pub use front_matter::{parse_date, FrontMatter};
pub use loader::{ContentLoader, LoadStats};
pub use walker::ContentWalker;
