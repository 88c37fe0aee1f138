// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The approximate-match index behind Tier 2.
//!
//! Built once per word list: every headword is folded and split into chars
//! up front, together with its field-length norm. A query then costs one
//! bounded DP per headword, most of which bail out on the first row or two.
//!
//! # Scoring
//!
//! `score = (distance / query_len) ^ norm`, where `norm = 1 / sqrt(tokens)`
//! for the headword. Lower is better; an exact substring hit scores `0`.
//! Multi-word headwords are nudged down, so "kaks" prefers "kaksi" over
//! "kaksi bora" at the same distance.
//!
//! A headword is a candidate when `distance / query_len <= threshold`. With
//! the default threshold of 0.4 a five-letter query tolerates two edits and
//! a two-letter query tolerates none.

use super::levenshtein::substring_distance_within;
use crate::config::FuzzyConfig;
use crate::types::WordList;
use std::cmp::Ordering;

/// One Tier 2 candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyHit {
    /// Position in the `WordList`.
    pub position: usize,
    /// Edit distance to the best-matching substring of the headword.
    pub distance: usize,
    /// Dissimilarity in `[0, 1]`; lower ranks first.
    pub score: f64,
}

#[derive(Debug, Clone)]
struct IndexedWord {
    chars: Box<[char]>,
    norm: f64,
}

/// Fuzzy index over the headwords of one `WordList`.
#[derive(Debug, Clone)]
pub struct ApproximateIndex {
    words: Vec<IndexedWord>,
    config: FuzzyConfig,
    list: WordList,
}

impl ApproximateIndex {
    /// Index every headword of `list`.
    pub fn build(list: &WordList, config: &FuzzyConfig) -> Self {
        let words = list
            .iter()
            .map(|(_, _, folded)| IndexedWord {
                chars: folded.chars().collect(),
                norm: field_norm(folded),
            })
            .collect();

        Self {
            words,
            config: config.clone(),
            list: list.clone(),
        }
    }

    /// Was this index built over `list` (by identity)?
    pub fn is_for(&self, list: &WordList) -> bool {
        self.list.same_list(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    /// Largest distance a query of `query_len` chars may have.
    pub fn max_distance(&self, query_len: usize) -> usize {
        let by_threshold = (self.config.threshold * query_len as f64).floor() as usize;
        match self.config.max_edits {
            Some(cap) => by_threshold.min(cap),
            None => by_threshold,
        }
    }

    /// All candidates for `folded_query`, best first.
    ///
    /// `folded_query` must already be normalized. Ties on score go to the
    /// earlier list position, so the order is total and repeatable.
    pub fn search(&self, folded_query: &str) -> Vec<FuzzyHit> {
        let query: Vec<char> = folded_query.chars().collect();
        if query.is_empty() {
            return Vec::new();
        }

        let max = self.max_distance(query.len());
        let query_len = query.len() as f64;

        let mut hits: Vec<FuzzyHit> = self
            .words
            .iter()
            .enumerate()
            .filter_map(|(position, word)| {
                let distance = substring_distance_within(&query, &word.chars, max)?;
                let raw = distance as f64 / query_len;
                let score = if distance == 0 {
                    0.0
                } else if self.config.ignore_field_norm {
                    raw
                } else {
                    raw.powf(word.norm)
                };
                Some(FuzzyHit {
                    position,
                    distance,
                    score,
                })
            })
            .collect();

        hits.sort_by(compare_hits);
        hits
    }
}

/// Score ascending, then list position ascending.
pub(crate) fn compare_hits(a: &FuzzyHit, b: &FuzzyHit) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// `1 / sqrt(token count)`, rounded to three places.
fn field_norm(folded: &str) -> f64 {
    let tokens = folded.split_whitespace().count().max(1);
    let norm = 1.0 / (tokens as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}
