//! Snapshot publication.
//!
//! Holds the current [`RelatednessSnapshot`] behind an `Arc` swap. Readers
//! clone the `Arc` and query without holding any lock, so a rebuild never
//! blocks an in-flight query and a query never observes a half-built index.
//!
//! Rebuilds are serialized: a rebuild that starts later always publishes
//! later, so an older corpus never replaces a newer one.

use crate::core::document::Document;
use crate::core::index::RelatednessSnapshot;
use crate::core::registry::IndexRegistry;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Atomically replaceable snapshot handle
#[derive(Debug)]
pub struct SnapshotStore<Id> {
    registry: Arc<IndexRegistry>,
    current: RwLock<Arc<RelatednessSnapshot<Id>>>,
    generation: AtomicU64,
    /// Held for the whole build-and-publish of one rebuild
    rebuilding: Mutex<()>,
}

impl<Id> SnapshotStore<Id>
where
    Id: Clone + Eq + Hash + Debug,
{
    /// Create a store holding an empty snapshot for `registry`
    pub fn new(registry: IndexRegistry) -> Self {
        let empty = RelatednessSnapshot::empty(&registry);
        Self {
            registry: Arc::new(registry),
            current: RwLock::new(Arc::new(empty)),
            generation: AtomicU64::new(0),
            rebuilding: Mutex::new(()),
        }
    }

    /// Build a new snapshot from `documents` and publish it
    ///
    /// The build runs outside the read lock, so queries keep answering from
    /// the previous snapshot. Concurrent rebuilds wait for each other and
    /// publish in the order they started. Returns the published snapshot.
    pub fn rebuild<D>(&self, documents: &[D]) -> Arc<RelatednessSnapshot<Id>>
    where
        D: Document<Id = Id> + Sync,
    {
        let _rebuilding = self
            .rebuilding
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let snapshot = Arc::new(RelatednessSnapshot::build(documents, &self.registry));
        self.publish(Arc::clone(&snapshot));
        snapshot
    }

    /// Replace the current snapshot, returning the new generation number
    ///
    /// Last writer wins. Callers publishing snapshots they built themselves
    /// from several threads must order those calls.
    pub fn publish(&self, snapshot: Arc<RelatednessSnapshot<Id>>) -> u64 {
        let documents = snapshot.document_count();
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = snapshot;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        drop(guard);

        tracing::info!(
            "Published relatedness snapshot generation {} ({} documents)",
            generation,
            documents
        );
        generation
    }
}

impl<Id> SnapshotStore<Id> {
    /// The snapshot visible right now
    pub fn current(&self) -> Arc<RelatednessSnapshot<Id>> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Number of snapshots published so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn registry(&self) -> &IndexRegistry {
        &self.registry
    }
}
