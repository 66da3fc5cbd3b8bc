//! Content loading pipeline.
//!
//! Coordinates the corpus side of a build:
//! 1. Walk the content directory
//! 2. Parse each file's front matter
//! 3. Apply the visibility policy (drafts, future, expired)
//! 4. Normalize keyword values per index
//!
//! Files that fail to parse are logged and skipped so a single bad page
//! does not abort the build.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::config::ContentConfig;
use crate::core::content::front_matter::FrontMatter;
use crate::core::content::walker::ContentWalker;
use crate::core::document::Page;
use crate::core::error::Result;
use crate::core::keyword::Keyword;
use crate::core::registry::{IndexConfig, IndexRegistry};

/// Statistics from one content load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub files_seen: usize,
    pub pages_loaded: usize,
    pub hidden: usize,
    pub failed: usize,
    pub duration_ms: u64,
}

/// Loads [`Page`]s from a content directory
pub struct ContentLoader {
    walker: ContentWalker,
    indices: Vec<IndexConfig>,
    build_drafts: bool,
    build_future: bool,
    build_expired: bool,
    now: DateTime<Utc>,
}

impl ContentLoader {
    /// Create a loader for the indices in `registry`
    pub fn new(config: &ContentConfig, registry: &IndexRegistry) -> Result<Self> {
        let walker = ContentWalker::new(&config.include_patterns, &config.exclude_patterns)?;
        let indices = registry.iter().cloned().collect();

        Ok(Self {
            walker,
            indices,
            build_drafts: config.build_drafts,
            build_future: config.build_future,
            build_expired: config.build_expired,
            now: Utc::now(),
        })
    }

    /// Evaluate future/expired visibility against `now` instead of the clock
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Load every visible page below `root`, in path order
    pub fn load(&self, root: &Path) -> Result<(Vec<Page>, LoadStats)> {
        let start = Instant::now();

        // Surface a missing content dir instead of returning an empty corpus
        fs::metadata(root)?;

        tracing::info!("Loading content from {:?}", root);
        let files = self.walker.collect_files(root)?;

        let mut stats = LoadStats {
            files_seen: files.len(),
            ..LoadStats::default()
        };
        let mut pages = Vec::with_capacity(files.len());

        for path in &files {
            match self.load_file(root, path) {
                Ok(Some(page)) => {
                    tracing::debug!("Loaded {} ({})", page.id, page.title);
                    pages.push(page);
                }
                Ok(None) => stats.hidden += 1,
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                    stats.failed += 1;
                }
            }
        }

        stats.pages_loaded = pages.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Content loaded: {} pages, {} hidden, {} failed in {}ms",
            stats.pages_loaded,
            stats.hidden,
            stats.failed,
            stats.duration_ms
        );

        Ok((pages, stats))
    }

    /// Load one file; `Ok(None)` when the visibility policy hides it
    pub fn load_file(&self, root: &Path, path: &Path) -> Result<Option<Page>> {
        let source = fs::read_to_string(path)?;
        let front_matter = FrontMatter::parse(path, &source)?;

        let relative = path.strip_prefix(root).unwrap_or(path);
        let id = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let date = match front_matter.date {
            Some(date) => date,
            None => fs::metadata(path)?
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        };

        if !self.is_visible(&id, &front_matter, date) {
            return Ok(None);
        }

        let title = front_matter.title.clone().unwrap_or_else(|| {
            relative
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| id.clone())
        });

        let mut taxonomies = HashMap::new();
        for index in &self.indices {
            let keywords = normalize(index, front_matter.string_list(&index.name));
            if !keywords.is_empty() {
                taxonomies.insert(index.name.clone(), keywords);
            }
        }

        Ok(Some(Page {
            id,
            title,
            date,
            taxonomies,
        }))
    }

    fn is_visible(&self, id: &str, front_matter: &FrontMatter, date: DateTime<Utc>) -> bool {
        if front_matter.draft && !self.build_drafts {
            tracing::debug!("Hiding draft {}", id);
            return false;
        }
        if date > self.now && !self.build_future {
            tracing::debug!("Hiding future page {} ({})", id, date);
            return false;
        }
        if let Some(expiry) = front_matter.expiry_date {
            if expiry <= self.now && !self.build_expired {
                tracing::debug!("Hiding expired page {} ({})", id, expiry);
                return false;
            }
        }
        true
    }
}

fn normalize(index: &IndexConfig, values: Vec<String>) -> Vec<Keyword> {
    values
        .iter()
        .filter_map(|value| index.normalize(value))
        .collect()
}
