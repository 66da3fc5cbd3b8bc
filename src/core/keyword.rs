//! Keyword values.
//!
//! A [`Keyword`] is one discrete tag inside one named index. Comparison is
//! exact: `"Hugo"` and `"hugo"` are different keywords. Callers normalize
//! before handing values to the engine.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A single classification keyword
///
/// Backed by `Arc<str>` so posting-list keys and document keyword sets can
/// share the same allocation cheaply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyword(Arc<str>);

impl Keyword {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(Arc::from(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Keyword {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Keyword {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Keyword {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

/// Explicit keyword criteria for one named index
///
/// The typed counterpart of a template's `(index, values...)` argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    pub index: String,
    pub keywords: Vec<Keyword>,
}

impl KeywordQuery {
    pub fn new<I, K>(index: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Keyword>,
    {
        Self {
            index: index.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}
