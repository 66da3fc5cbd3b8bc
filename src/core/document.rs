//! Document capability contract.
//!
//! The engine never owns or mutates content. Anything that can report an
//! identity, a publication time and its keywords per named index can be
//! indexed and related.

use crate::core::keyword::Keyword;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// What the engine needs to know about a piece of content
pub trait Document {
    /// Stable identity, unique within one corpus
    type Id: Clone + Eq + Hash + Ord + Debug + Send + Sync;

    fn id(&self) -> Self::Id;

    /// Publication time, used as the secondary ranking key
    fn published(&self) -> DateTime<Utc>;

    /// Keyword values this document carries for `index`
    ///
    /// Duplicates are allowed and collapse during indexing. An index the
    /// document knows nothing about yields an empty list.
    fn keywords(&self, index: &str) -> Vec<Keyword>;
}

impl<D: Document + ?Sized> Document for &D {
    type Id = D::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn published(&self) -> DateTime<Utc> {
        (**self).published()
    }

    fn keywords(&self, index: &str) -> Vec<Keyword> {
        (**self).keywords(index)
    }
}

impl<D: Document + ?Sized> Document for std::sync::Arc<D> {
    type Id = D::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn published(&self) -> DateTime<Utc> {
        (**self).published()
    }

    fn keywords(&self, index: &str) -> Vec<Keyword> {
        (**self).keywords(index)
    }
}

/// A content page loaded from the site's content directory
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Content-relative path with `/` separators
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub taxonomies: HashMap<String, Vec<Keyword>>,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            taxonomies: HashMap::new(),
        }
    }

    /// Builder-style helper to attach keywords for one index
    pub fn with_keywords<I, K>(mut self, index: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Keyword>,
    {
        self.taxonomies
            .entry(index.into())
            .or_default()
            .extend(keywords.into_iter().map(Into::into));
        self
    }
}

impl Document for Page {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn published(&self) -> DateTime<Utc> {
        self.date
    }

    fn keywords(&self, index: &str) -> Vec<Keyword> {
        self.taxonomies.get(index).cloned().unwrap_or_default()
    }
}
