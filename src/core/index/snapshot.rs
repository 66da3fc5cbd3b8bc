//! Immutable relatedness snapshot.
//!
//! One snapshot holds every inverted index for one corpus version, plus the
//! per-document facts the ranker needs. It is never patched: a content change
//! produces a new snapshot which replaces the old one wholesale.

use crate::core::document::Document;
use crate::core::index::inverted::InvertedIndex;
use crate::core::registry::IndexRegistry;
use crate::core::types::BuildStats;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ranking facts kept per indexed document
#[derive(Debug, Clone, PartialEq)]
pub struct DocEntry<Id> {
    pub id: Id,
    pub published: DateTime<Utc>,
    /// Position in the corpus slice passed to [`RelatednessSnapshot::build`]
    pub position: usize,
}

/// All inverted indices for one corpus version
#[derive(Debug, Clone)]
pub struct RelatednessSnapshot<Id> {
    pub(crate) registry: IndexRegistry,
    /// Aligned with registry registration order
    pub(crate) indices: Vec<InvertedIndex>,
    pub(crate) documents: Vec<DocEntry<Id>>,
    pub(crate) slots: HashMap<Id, usize>,
    stats: BuildStats,
}

impl<Id> RelatednessSnapshot<Id>
where
    Id: Clone + Eq + Hash + Debug,
{
    /// Build a snapshot from an ordered corpus
    ///
    /// Pure function of its inputs. Documents whose identity was already
    /// seen earlier in the corpus are skipped. With the `parallel` feature the
    /// named indices are built concurrently and merged before returning.
    pub fn build<D>(documents: &[D], registry: &IndexRegistry) -> Self
    where
        D: Document<Id = Id> + Sync,
    {
        let start = Instant::now();

        let mut entries: Vec<DocEntry<Id>> = Vec::with_capacity(documents.len());
        let mut slots: HashMap<Id, usize> = HashMap::with_capacity(documents.len());
        let mut accepted: Vec<(usize, &D)> = Vec::with_capacity(documents.len());
        let mut duplicates_skipped = 0;

        for (position, doc) in documents.iter().enumerate() {
            let id = doc.id();
            if slots.contains_key(&id) {
                tracing::warn!(
                    "Skipping document {:?} at position {}: identity already indexed",
                    id,
                    position
                );
                duplicates_skipped += 1;
                continue;
            }

            let slot = entries.len();
            slots.insert(id.clone(), slot);
            entries.push(DocEntry {
                id,
                published: doc.published(),
                position,
            });
            accepted.push((slot, doc));
        }

        let indices = build_indices(registry, &accepted);

        let stats = BuildStats {
            documents: entries.len(),
            duplicates_skipped,
            keywords_per_index: indices
                .iter()
                .map(|index| (index.name().to_string(), index.keyword_count()))
                .collect(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Relatedness snapshot built: {} documents, {} indices in {}ms",
            stats.documents,
            indices.len(),
            stats.duration_ms
        );

        Self {
            registry: registry.clone(),
            indices,
            documents: entries,
            slots,
            stats,
        }
    }
}

impl<Id> RelatednessSnapshot<Id> {
    /// Snapshot of an empty corpus, with one empty index per registration
    pub fn empty(registry: &IndexRegistry) -> Self {
        let indices: Vec<InvertedIndex> = registry
            .iter()
            .cloned()
            .map(InvertedIndex::empty)
            .collect();
        let stats = BuildStats {
            documents: 0,
            duplicates_skipped: 0,
            keywords_per_index: indices
                .iter()
                .map(|index| (index.name().to_string(), 0))
                .collect(),
            duration_ms: 0,
        };

        Self {
            registry: registry.clone(),
            indices,
            documents: Vec::new(),
            slots: HashMap::new(),
            stats,
        }
    }

    pub fn registry(&self) -> &IndexRegistry {
        &self.registry
    }

    /// Inverted index registered under `name`
    pub fn index(&self, name: &str) -> Option<&InvertedIndex> {
        self.registry.position(name).map(|pos| &self.indices[pos])
    }

    /// All inverted indices in registration order
    pub fn indices(&self) -> &[InvertedIndex] {
        &self.indices
    }

    /// Indexed documents in corpus order
    pub fn documents(&self) -> &[DocEntry<Id>] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }
}

impl<Id: Eq + Hash> RelatednessSnapshot<Id> {
    /// Whether a document with this identity was indexed
    pub fn contains(&self, id: &Id) -> bool {
        self.slots.contains_key(id)
    }
}

#[cfg(feature = "parallel")]
fn build_indices<D>(registry: &IndexRegistry, accepted: &[(usize, &D)]) -> Vec<InvertedIndex>
where
    D: Document + Sync,
{
    registry
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|config| InvertedIndex::build(config, accepted))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn build_indices<D>(registry: &IndexRegistry, accepted: &[(usize, &D)]) -> Vec<InvertedIndex>
where
    D: Document + Sync,
{
    build_indices_sequential(registry, accepted)
}

#[cfg(any(test, not(feature = "parallel")))]
fn build_indices_sequential<D>(
    registry: &IndexRegistry,
    accepted: &[(usize, &D)],
) -> Vec<InvertedIndex>
where
    D: Document,
{
    registry
        .iter()
        .cloned()
        .map(|config| InvertedIndex::build(config, accepted))
        .collect()
}
