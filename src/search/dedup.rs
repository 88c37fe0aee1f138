// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Merging Tier 1 and Tier 2 without showing the same word twice.
//!
//! A headword should appear at most once among the fuzzy additions. Tier 1
//! results always go in, in order, and their spellings are recorded; a Tier 2
//! hit is added only if its lower-cased spelling has not been seen yet. Two
//! different entries spelled "Kaksi" and "kaksi" collapse to whichever came
//! first.
//!
//! **Invariant**: for every lower-cased headword, at most one result after
//! the Tier 1 block carries it, and none if Tier 1 already did.

use super::{MatchKind, Ranked};
use crate::fuzzy::FuzzyHit;
use crate::types::WordList;
use std::collections::HashSet;

/// Order-preserving merger with case-insensitive headword dedup.
#[derive(Debug)]
pub struct ResultMerger<'a> {
    list: &'a WordList,
    seen: HashSet<String>,
    results: Vec<Ranked>,
}

impl<'a> ResultMerger<'a> {
    pub fn new(list: &'a WordList) -> Self {
        Self {
            list,
            seen: HashSet::new(),
            results: Vec::new(),
        }
    }

    /// Pre-allocate for roughly `capacity` results.
    pub fn with_capacity(list: &'a WordList, capacity: usize) -> Self {
        Self {
            list,
            seen: HashSet::with_capacity(capacity),
            results: Vec::with_capacity(capacity),
        }
    }

    fn key(&self, position: usize) -> Option<String> {
        self.list.get(position).map(|e| e.word.to_lowercase())
    }

    /// Add a Tier 1 result unconditionally and record its spelling.
    pub fn push_primary(&mut self, result: Ranked) {
        if let Some(key) = self.key(result.position) {
            self.seen.insert(key);
            self.results.push(result);
        }
    }

    /// Add a later-tier result unless its spelling was already seen.
    ///
    /// Returns `true` if the result was added.
    pub fn push_secondary(&mut self, result: Ranked) -> bool {
        match self.key(result.position) {
            Some(key) if self.seen.insert(key.clone()) => {
                self.results.push(result);
                true
            }
            _ => false,
        }
    }

    pub fn merge_primary(&mut self, results: impl IntoIterator<Item = Ranked>) {
        for result in results {
            self.push_primary(result);
        }
    }

    pub fn merge_secondary(&mut self, results: impl IntoIterator<Item = Ranked>) {
        for result in results {
            self.push_secondary(result);
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Merged results in insertion order, cut to `limit`.
    pub fn into_truncated(mut self, limit: usize) -> Vec<Ranked> {
        self.results.truncate(limit);
        self.results
    }
}

/// Tier 1 block, then unseen Tier 2 hits, then truncate.
pub fn merge_tiers(list: &WordList, tier1: Vec<Ranked>, tier2: &[FuzzyHit], limit: usize) -> Vec<Ranked> {
    let mut merger = ResultMerger::with_capacity(list, tier1.len() + tier2.len());
    merger.merge_primary(tier1);
    merger.merge_secondary(
        tier2
            .iter()
            .map(|hit| Ranked::new(hit.position, MatchKind::Fuzzy)),
    );
    merger.into_truncated(limit)
}
