//! Unified service container for the related pages engine
//!
//! Provides shared access to the configuration and the published corpus:
//! one snapshot together with the pages it was built from.

use crate::core::config::Config;
use crate::core::content::{ContentLoader, LoadStats};
use crate::core::document::Page;
use crate::core::error::{QueryError, Result};
use crate::core::index::RelatednessSnapshot;
use crate::core::keyword::KeywordQuery;
use crate::core::registry::IndexRegistry;
use crate::core::store::SnapshotStore;
use crate::core::types::{QueryOptions, ScoredResult};
use std::sync::{Arc, Mutex, RwLock};

/// One published corpus version
///
/// The snapshot's result positions index into `pages`, so both halves are
/// always read through the same handle.
#[derive(Debug)]
pub struct Corpus {
    snapshot: Arc<RelatednessSnapshot<String>>,
    pages: Vec<Page>,
    generation: u64,
}

impl Corpus {
    fn empty(registry: &IndexRegistry) -> Self {
        Self {
            snapshot: Arc::new(RelatednessSnapshot::empty(registry)),
            pages: Vec::new(),
            generation: 0,
        }
    }

    pub fn snapshot(&self) -> &RelatednessSnapshot<String> {
        &self.snapshot
    }

    /// Pages in corpus order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Page with the given content-relative id
    pub fn page(&self, id: &str) -> Option<&Page> {
        let id = id.replace('\\', "/");
        self.pages.iter().find(|page| page.id == id)
    }

    /// Publication number of this corpus, 0 before the first load
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Ranked results together with the corpus they were scored against
#[derive(Debug)]
pub struct RelatedPages {
    pub corpus: Arc<Corpus>,
    pub results: Vec<ScoredResult<String>>,
}

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    store: Arc<SnapshotStore<String>>,

    /// Current corpus, swapped as a whole
    corpus: Arc<RwLock<Arc<Corpus>>>,

    /// Orders publications so the corpus never goes back in time
    publishing: Arc<Mutex<()>>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Fails if the configured indices do not register cleanly. The corpus
    /// starts empty until [`load_content`](Self::load_content).
    pub fn new(config: Config) -> Result<Self> {
        let registry = config.registry()?;
        let corpus = Corpus::empty(&registry);

        Ok(Self {
            store: Arc::new(SnapshotStore::new(registry)),
            config: Arc::new(config),
            corpus: Arc::new(RwLock::new(Arc::new(corpus))),
            publishing: Arc::new(Mutex::new(())),
        })
    }

    pub fn registry(&self) -> &IndexRegistry {
        self.store.registry()
    }

    /// Content loader for the configured content settings
    pub fn content_loader(&self) -> Result<ContentLoader> {
        ContentLoader::new(&self.config.content, self.registry())
    }

    /// Load the configured content directory and publish a fresh corpus
    pub fn load_content(&self) -> Result<LoadStats> {
        let loader = self.content_loader()?;
        let (pages, stats) = loader.load(&self.config.content.content_dir)?;
        self.publish_pages(pages);
        Ok(stats)
    }

    /// Index `pages` and make them the current corpus
    pub fn publish_pages(&self, pages: Vec<Page>) -> Arc<Corpus> {
        let _publishing = self
            .publishing
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let snapshot = self.store.rebuild(pages.as_slice());
        let corpus = Arc::new(Corpus {
            snapshot,
            pages,
            generation: self.store.generation(),
        });
        tracing::debug!(
            "Publishing corpus generation {} ({} pages, {} indexed)",
            corpus.generation,
            corpus.pages.len(),
            corpus.snapshot.document_count()
        );

        let mut guard = self
            .corpus
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::clone(&corpus);
        corpus
    }

    /// The corpus visible right now
    pub fn corpus(&self) -> Arc<Corpus> {
        let guard = self
            .corpus
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Explicit keyword query against the current corpus
    ///
    /// Query values go through the same normalization as front matter
    /// values of that index.
    pub fn related_to(&self, query: &KeywordQuery) -> Result<RelatedPages> {
        let corpus = self.corpus();
        let query = match self.registry().resolve(&query.index) {
            Some(index) => KeywordQuery {
                index: query.index.clone(),
                keywords: query
                    .keywords
                    .iter()
                    .filter_map(|keyword| index.normalize(keyword.as_str()))
                    .collect(),
            },
            // Left to the snapshot, which reports the unknown index
            None => query.clone(),
        };

        let results = corpus.snapshot().related_to(&query)?;
        Ok(RelatedPages { corpus, results })
    }

    /// Pages related to the page `id`
    ///
    /// An empty `indices` list means every registered index. Callers pass
    /// `config.related.query_options()` unless a flag overrides it.
    pub fn related(
        &self,
        id: &str,
        indices: &[String],
        options: QueryOptions,
    ) -> Result<RelatedPages> {
        let corpus = self.corpus();
        let source = corpus
            .page(id)
            .ok_or_else(|| QueryError::UnknownDocument(id.to_string()))?;

        let results = if indices.is_empty() {
            corpus.snapshot().related_with(source, options)?
        } else {
            corpus.snapshot().related_indices_with(source, indices, options)?
        };
        Ok(RelatedPages { corpus, results })
    }
}
