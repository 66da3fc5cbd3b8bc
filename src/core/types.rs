//! Core data types for the related pages engine.
//!
//! Query results and build statistics shared by the engine, the
//! snapshot store and the CLI adapter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One ranked relatedness hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult<Id> {
    /// Identity of the related document
    pub id: Id,

    /// Weighted count of shared distinct keywords (always > 0)
    pub score: f64,

    /// Publication time, the secondary ranking key
    pub published: DateTime<Utc>,

    /// Position in the corpus slice the snapshot was built from
    pub position: usize,

    /// Distinct matched keywords per index name
    pub matched: BTreeMap<String, usize>,
}

impl<Id> ScoredResult<Id> {
    /// Total distinct keyword matches across all indices
    pub fn matched_total(&self) -> usize {
        self.matched.values().sum()
    }
}

/// Options for document-based queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Keep candidates published after the source document
    pub include_newer: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            include_newer: true,
        }
    }
}

/// Statistics from one snapshot build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Documents accepted into the snapshot
    pub documents: usize,

    /// Documents skipped because their identity was already seen
    pub duplicates_skipped: usize,

    /// Distinct keywords per index, in registration order
    pub keywords_per_index: Vec<(String, usize)>,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}
