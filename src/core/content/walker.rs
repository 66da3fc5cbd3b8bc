//! Content directory walker with pattern-based filtering.
//!
//! Traverses the content tree in a stable (file name sorted) order and
//! filters files using glob patterns matched against the content-relative
//! path. Unreadable entries are logged and skipped.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{ConfigError, Result};

/// Content walker with pattern-based filtering
pub struct ContentWalker {
    /// Patterns to include (e.g., "**/*.md")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "**/_*/**")
    exclude_patterns: Vec<Pattern>,
}

impl ContentWalker {
    /// Create a new content walker
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for files to include
    /// * `exclude_patterns` - Glob patterns for files to exclude
    ///
    /// # Returns
    ///
    /// A new `ContentWalker` or an error if a pattern is invalid
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self> {
        Ok(Self {
            include_patterns: compile(include_patterns, "include")?,
            exclude_patterns: compile(exclude_patterns, "exclude")?,
        })
    }

    /// Collect all matching files below `root`, sorted by path
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();
                    let relative = path.strip_prefix(root).unwrap_or(path);
                    if self.matches_patterns(relative) {
                        files.push(path.to_path_buf());
                    } else {
                        tracing::trace!("Skipping unmatched file: {:?}", relative);
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue walking despite errors
                }
            }
        }

        Ok(files)
    }

    /// Determine if a directory entry should be processed
    ///
    /// Filters out hidden directories and excluded directory trees.
    /// Never filters the root directory itself.
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if !entry.file_type().is_dir() {
            return true;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                return false;
            }
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        // A trailing separator lets "**/drafts/**" prune the directory itself
        let candidate = relative.join("_");
        for pattern in &self.exclude_patterns {
            if pattern.matches_path(&candidate) {
                tracing::debug!("Skipping excluded directory: {:?}", relative);
                return false;
            }
        }

        true
    }

    /// Check a content-relative path against the include/exclude patterns
    fn matches_patterns(&self, relative: &Path) -> bool {
        let matches_include = self.include_patterns.is_empty()
            || self.include_patterns.iter().any(|p| {
                // Match against both relative path and filename
                p.matches_path(relative)
                    || relative
                        .file_name()
                        .and_then(|f| f.to_str())
                        .map(|f| p.matches(f))
                        .unwrap_or(false)
            });

        matches_include && !self.exclude_patterns.iter().any(|p| p.matches_path(relative))
    }
}

fn compile(patterns: &[String], kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                ConfigError::Invalid(format!("Invalid {kind} pattern '{p}': {e}")).into()
            })
        })
        .collect()
}
