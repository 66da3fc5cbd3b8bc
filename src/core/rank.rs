//! Result ranking.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Publication time** - descending (newer first)
//! 3. **Corpus position** - ascending, so equal hits keep input order
//!
//! The third key makes the order total: two results never compare equal
//! unless they are the same document.

use crate::core::types::ScoredResult;
use std::cmp::Ordering;

/// Compare two results for ranking
pub fn compare<Id>(a: &ScoredResult<Id>, b: &ScoredResult<Id>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.published.cmp(&a.published))
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort results into final ranked order
pub fn rank<Id>(results: &mut [ScoredResult<Id>]) {
    results.sort_by(compare);
}
