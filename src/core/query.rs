//! Relatedness queries.
//!
//! Three entry points share one scoring primitive:
//!
//! - [`RelatednessSnapshot::related_to`] - explicit keywords in one index
//! - [`RelatednessSnapshot::related`] - a document's own keywords, all indices
//! - [`RelatednessSnapshot::related_indices`] - same, restricted to named indices
//!
//! A candidate's score is the sum over the considered indices of
//! `weight × distinct shared keywords`. Keywords whose document frequency
//! falls outside the index's cardinality thresholds contribute nothing.
//! Queries never mutate the snapshot and are safe to run concurrently.

use crate::core::document::Document;
use crate::core::error::QueryError;
use crate::core::index::RelatednessSnapshot;
use crate::core::keyword::{Keyword, KeywordQuery};
use crate::core::rank;
use crate::core::types::{QueryOptions, ScoredResult};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

/// Running score for one candidate slot
#[derive(Debug, Default)]
struct Tally {
    score: f64,
    matched: BTreeMap<String, usize>,
}

type Tallies = HashMap<usize, Tally>;

impl<Id> RelatednessSnapshot<Id>
where
    Id: Clone + Eq + Hash,
{
    /// Documents sharing keywords with an explicit keyword list
    ///
    /// Fails with [`QueryError::UnknownIndex`] for an unregistered index and
    /// [`QueryError::EmptyCriteria`] for an empty keyword list, in that order.
    pub fn related_to(&self, query: &KeywordQuery) -> Result<Vec<ScoredResult<Id>>, QueryError> {
        let pos = self
            .registry
            .position(&query.index)
            .ok_or_else(|| QueryError::UnknownIndex(query.index.clone()))?;
        if query.keywords.is_empty() {
            return Err(QueryError::EmptyCriteria);
        }

        let mut tallies = Tallies::new();
        self.accumulate(pos, query.keywords.iter().cloned(), &mut tallies);

        tracing::debug!(
            "related_to '{}' with {} keywords: {} candidates",
            query.index,
            query.keywords.len(),
            tallies.len()
        );

        Ok(self.finish(tallies))
    }

    /// Documents related to `source` across every registered index
    pub fn related<D>(&self, source: &D) -> Result<Vec<ScoredResult<Id>>, QueryError>
    where
        D: Document<Id = Id> + ?Sized,
    {
        self.related_with(source, QueryOptions::default())
    }

    /// [`related`](Self::related) with explicit options
    pub fn related_with<D>(
        &self,
        source: &D,
        options: QueryOptions,
    ) -> Result<Vec<ScoredResult<Id>>, QueryError>
    where
        D: Document<Id = Id> + ?Sized,
    {
        if self.registry.is_empty() {
            return Err(QueryError::NoIndicesConfigured);
        }

        let positions: Vec<usize> = (0..self.indices.len()).collect();
        Ok(self.score_document(source, &positions, options))
    }

    /// Documents related to `source` across the named indices only
    pub fn related_indices<D, S>(
        &self,
        source: &D,
        names: &[S],
    ) -> Result<Vec<ScoredResult<Id>>, QueryError>
    where
        D: Document<Id = Id> + ?Sized,
        S: AsRef<str>,
    {
        self.related_indices_with(source, names, QueryOptions::default())
    }

    /// [`related_indices`](Self::related_indices) with explicit options
    ///
    /// Every name is validated before any scoring happens. A name listed
    /// twice is considered once.
    pub fn related_indices_with<D, S>(
        &self,
        source: &D,
        names: &[S],
        options: QueryOptions,
    ) -> Result<Vec<ScoredResult<Id>>, QueryError>
    where
        D: Document<Id = Id> + ?Sized,
        S: AsRef<str>,
    {
        if names.is_empty() {
            return Err(QueryError::EmptyCriteria);
        }

        let mut positions = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let pos = self
                .registry
                .position(name)
                .ok_or_else(|| QueryError::UnknownIndex(name.to_string()))?;
            if !positions.contains(&pos) {
                positions.push(pos);
            }
        }

        Ok(self.score_document(source, &positions, options))
    }

    fn score_document<D>(
        &self,
        source: &D,
        positions: &[usize],
        options: QueryOptions,
    ) -> Vec<ScoredResult<Id>>
    where
        D: Document<Id = Id> + ?Sized,
    {
        let mut tallies = Tallies::new();
        for &pos in positions {
            let keywords = source.keywords(self.indices[pos].name());
            self.accumulate(pos, keywords, &mut tallies);
        }

        if let Some(slot) = self.slots.get(&source.id()) {
            tallies.remove(slot);
        }

        if !options.include_newer {
            let cutoff = source.published();
            tallies.retain(|slot, _| self.documents[*slot].published <= cutoff);
        }

        tracing::debug!(
            "related over {} indices: {} candidates",
            positions.len(),
            tallies.len()
        );

        self.finish(tallies)
    }

    /// Add one index's contribution for `keywords` into `tallies`
    fn accumulate<I>(&self, pos: usize, keywords: I, tallies: &mut Tallies)
    where
        I: IntoIterator<Item = Keyword>,
    {
        let index = &self.indices[pos];
        let config = index.config();

        // Criteria are a set: a repeated keyword matches once
        let criteria: BTreeSet<Keyword> = keywords.into_iter().collect();

        for keyword in &criteria {
            let Some(postings) = index.scoring_postings(keyword.as_str()) else {
                continue;
            };
            for &slot in postings {
                let tally = tallies.entry(slot).or_default();
                tally.score += config.weight;
                *tally.matched.entry(config.name.clone()).or_insert(0) += 1;
            }
        }
    }

    fn finish(&self, tallies: Tallies) -> Vec<ScoredResult<Id>> {
        let mut results: Vec<ScoredResult<Id>> = tallies
            .into_iter()
            .filter(|(_, tally)| tally.score > 0.0)
            .map(|(slot, tally)| {
                let entry = &self.documents[slot];
                ScoredResult {
                    id: entry.id.clone(),
                    score: tally.score,
                    published: entry.published,
                    position: entry.position,
                    matched: tally.matched,
                }
            })
            .collect();

        rank::rank(&mut results);
        results
    }
}
