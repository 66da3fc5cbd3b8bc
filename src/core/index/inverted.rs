//! Per-index inverted index.
//!
//! Maps each keyword of one named index to the set of document slots that
//! carry it. Slots are dense positions into the snapshot's document table,
//! ascending in corpus order.

use crate::core::document::Document;
use crate::core::keyword::Keyword;
use crate::core::registry::IndexConfig;
use std::collections::{BTreeSet, HashMap};

/// Posting list: slots of the documents holding one keyword
pub type Postings = BTreeSet<usize>;

/// Keyword → postings for one [`IndexConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct InvertedIndex {
    config: IndexConfig,
    postings: HashMap<Keyword, Postings>,
}

impl InvertedIndex {
    /// Build the index for `config` from `(slot, document)` pairs
    ///
    /// Each document is visited once. Postings are sets, so a keyword
    /// repeated within one document counts once.
    pub(crate) fn build<D: Document>(config: IndexConfig, documents: &[(usize, &D)]) -> Self {
        let mut postings: HashMap<Keyword, Postings> = HashMap::new();
        let mut occurrences = 0usize;

        for (slot, doc) in documents {
            for keyword in doc.keywords(&config.name) {
                occurrences += 1;
                postings.entry(keyword).or_default().insert(*slot);
            }
        }

        tracing::debug!(
            "Built index '{}': {} keywords from {} occurrences",
            config.name,
            postings.len(),
            occurrences
        );

        Self { config, postings }
    }

    pub(crate) fn empty(config: IndexConfig) -> Self {
        Self {
            config,
            postings: HashMap::new(),
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Documents holding `keyword`, if any
    pub fn postings(&self, keyword: &str) -> Option<&Postings> {
        self.postings.get(keyword)
    }

    /// Number of documents holding `keyword`
    pub fn document_frequency(&self, keyword: &str) -> usize {
        self.postings.get(keyword).map_or(0, BTreeSet::len)
    }

    /// Postings for `keyword` only if its frequency passes the thresholds
    pub(crate) fn scoring_postings(&self, keyword: &str) -> Option<&Postings> {
        let postings = self.postings.get(keyword)?;
        if self.config.admits(postings.len()) {
            Some(postings)
        } else {
            tracing::trace!(
                "Keyword '{}' in '{}' outside cardinality thresholds ({} documents)",
                keyword,
                self.config.name,
                postings.len()
            );
            None
        }
    }

    /// Distinct keywords in this index
    pub fn keyword_count(&self) -> usize {
        self.postings.len()
    }

    /// Keywords with their document frequency, most common first
    ///
    /// Ties are ordered by keyword so the listing is stable.
    pub fn keywords_by_frequency(&self) -> Vec<(&Keyword, usize)> {
        let mut keywords: Vec<(&Keyword, usize)> = self
            .postings
            .iter()
            .map(|(keyword, postings)| (keyword, postings.len()))
            .collect();
        keywords.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        keywords
    }
}
