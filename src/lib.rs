//! related-pages - Related content engine for static sites
//!
//! Computes "related pages" for a content corpus: pages sharing keywords
//! in weighted, named indices (keywords, tags, categories, ...) score
//! higher, ties fall back to newer pages first and then corpus order.
//!
//! # Architecture
//!
//! The codebase is organized into two modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types
//!   - registry (named index definitions)
//!   - index (inverted indices, immutable snapshots)
//!   - query, rank (scoring and ordering)
//!   - store (atomic snapshot publication)
//!   - content (content directory loading)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Key Features
//!
//! - Any type implementing [`Document`] can be indexed
//! - Per-index weights and cardinality thresholds
//! - Deterministic ranking (score, then date, then corpus order)
//! - Lock-free reads while a new snapshot is published
//! - Parallel index builds behind the `parallel` feature

// Core domain logic (adapter-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::document::{Document, Page};
pub use crate::core::error::{ConfigError, QueryError, RelatedError, Result};
pub use crate::core::index::RelatednessSnapshot;
pub use crate::core::keyword::{Keyword, KeywordQuery};
pub use crate::core::registry::{IndexConfig, IndexRegistry};
pub use crate::core::services::Services;
pub use crate::core::store::SnapshotStore;
pub use crate::core::types::*;
