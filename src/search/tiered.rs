// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three tiers: exact + prefix → fuzzy, and definition substring.
//!
//! Each tier caps its own output and preserves a deterministic order:
//! - Tier 1: exact matches first, then prefix matches, list order within each
//! - Tier 2: ascending fuzzy score, list order on ties
//! - Tier 3: list order
//!
//! Tier 1 scans twice rather than sorting once. The exact pass is a string
//! comparison against precomputed folded headwords; the prefix pass compiles
//! the query once and runs it against raw headwords, so "kaks" finds
//! "kàksi" without folding the headword on every keystroke.

use super::{MatchKind, Ranked};
use crate::fuzzy::{ApproximateIndex, FuzzyHit};
use crate::normalize::{normalize, PrefixPattern};
use crate::types::WordList;
use std::collections::HashSet;

/// Tier 1: exact matches on the folded headword, then diacritic-aware prefix
/// matches, at most `limit` in total.
///
/// `query` is the raw (trimmed) query. Entries are tracked by position, so
/// two entries with the same spelling both come back.
pub fn exact_and_prefix(query: &str, list: &WordList, limit: usize) -> Vec<Ranked> {
    let folded = normalize(query);
    if folded.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<usize> = HashSet::new();
    let mut results: Vec<Ranked> = Vec::new();

    // Pass 1: exact
    for (position, _, folded_word) in list.iter() {
        if results.len() >= limit {
            break;
        }
        if folded_word == folded && seen.insert(position) {
            results.push(Ranked::new(position, MatchKind::Exact));
        }
    }

    // Pass 2: prefix, only if exact matches left room
    if results.len() < limit {
        let pattern = PrefixPattern::new(query);
        for (position, entry, folded_word) in list.iter() {
            if results.len() >= limit {
                break;
            }
            if !seen.contains(&position) && pattern.matches(&entry.word, folded_word) {
                seen.insert(position);
                results.push(Ranked::new(position, MatchKind::Prefix));
            }
        }
    }

    results
}

/// Tier 2: the `limit` best fuzzy candidates for `query`.
pub fn approximate(query: &str, index: &ApproximateIndex, limit: usize) -> Vec<FuzzyHit> {
    let mut hits = index.search(&normalize(query));
    hits.truncate(limit);
    hits
}

/// Tier 3: entries whose definition contains `query`, ignoring case only.
pub fn definition_search(query: &str, list: &WordList, limit: usize) -> Vec<Ranked> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    list.entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.definition.to_lowercase().contains(&needle))
        .take(limit)
        .map(|(position, _)| Ranked::new(position, MatchKind::Definition))
        .collect()
}
