//! Core domain logic (adapter-agnostic)
//!
//! This module contains the relatedness engine and the content adapter
//! that feeds it. Nothing here knows about the command line.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **keyword**, **document**: Input contract for the engine
//! - **registry**: Named index definitions
//! - **index**: Inverted indices and immutable snapshots
//! - **query**, **rank**: Scoring and deterministic ordering
//! - **store**: Atomic snapshot publication
//! - **content**: Content directory walking and front matter
//! - **services**: Unified service container

pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod index;
pub mod keyword;
pub mod query;
pub mod rank;
pub mod registry;
pub mod services;
pub mod store;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use document::{Document, Page};
pub use error::{ConfigError, QueryError, RelatedError, Result};
pub use index::RelatednessSnapshot;
pub use keyword::{Keyword, KeywordQuery};
pub use registry::{IndexConfig, IndexRegistry};
pub use services::Services;
pub use store::SnapshotStore;
