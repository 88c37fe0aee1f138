// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a dictionary search.
//!
//! A `WordEntry` is what the UI renders. A `WordList` is the immutable,
//! shared collection of entries plus the folded form of every headword, so
//! Tier 1 never re-normalizes the dictionary on a keystroke.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **WordEntry**: `word` is non-empty. The loader drops anything else.
//! - **WordList**: `folded.len() == entries.len()` and
//!   `folded[i] == normalize(entries[i].word)`. Positions are stable for the
//!   lifetime of the list, which is why caches and indexes store `usize`.
//! - **WordList identity**: two lists are the same list only if they share
//!   the same allocation. Content equality is not identity.

use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// ENTRIES
// =============================================================================

/// A single dictionary record.
///
/// `pos` and `definition` may be empty; `word` never is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub definition: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, pos: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
            definition: definition.into(),
        }
    }
}

/// The session's dictionary: entries in load order plus their folded headwords.
///
/// Cloning is cheap (two `Arc` bumps) and preserves identity.
#[derive(Debug, Clone)]
pub struct WordList {
    entries: Arc<[WordEntry]>,
    folded: Arc<[String]>,
}

impl WordList {
    /// Build a list, precomputing `normalize(word)` for every entry.
    pub fn new(entries: Vec<WordEntry>) -> Self {
        let folded: Vec<String> = entries.iter().map(|e| normalize(&e.word)).collect();
        Self {
            entries: entries.into(),
            folded: folded.into(),
        }
    }

    /// An empty list. Every search against it returns nothing.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&WordEntry> {
        self.entries.get(position)
    }

    /// Folded headword at `position` (same indexing as `entries()`).
    pub fn folded(&self, position: usize) -> Option<&str> {
        self.folded.get(position).map(String::as_str)
    }

    /// Iterate `(position, entry, folded_word)` in list order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &WordEntry, &str)> + '_ {
        self.entries
            .iter()
            .zip(self.folded.iter())
            .enumerate()
            .map(|(i, (entry, folded))| (i, entry, folded.as_str()))
    }

    /// Pointer identity, not content equality.
    pub fn same_list(&self, other: &WordList) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Resolve positions to owned entries, skipping anything out of range.
    pub fn resolve(&self, positions: &[usize]) -> Vec<WordEntry> {
        positions
            .iter()
            .filter_map(|&p| self.entries.get(p).cloned())
            .collect()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<WordEntry>> for WordList {
    fn from(entries: Vec<WordEntry>) -> Self {
        Self::new(entries)
    }
}

// =============================================================================
// SEARCH MODE
// =============================================================================

/// Which field of a `WordEntry` a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Headword search: Tier 1 (exact + prefix) with Tier 2 (fuzzy) fallback.
    #[default]
    Word,
    /// Substring search inside definitions (Tier 3 only).
    Definition,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Word => "word",
            SearchMode::Definition => "definition",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "word" | "w" => Ok(SearchMode::Word),
            "definition" | "def" | "d" => Ok(SearchMode::Definition),
            other => Err(format!(
                "unknown search mode '{}' (expected 'word' or 'definition')",
                other
            )),
        }
    }
}

// =============================================================================
// ENGINE STATE
// =============================================================================

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Readiness {
    /// No word list delivered yet. Searches are refused.
    NotReady,
    /// A word list is installed and queryable.
    Ready { entries: usize },
    /// Loading failed upstream. The engine answers every query with nothing.
    LoadFailed { reason: String },
}

impl Readiness {
    /// True once searches can run (including the empty load-failed state).
    pub fn is_queryable(&self) -> bool {
        !matches!(self, Readiness::NotReady)
    }
}

/// Instrumentation counters. Cheap to copy; read via `TieredSearchEngine::stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Non-empty queries handled (hits and misses).
    pub queries: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub tier1_runs: u64,
    pub tier2_runs: u64,
    pub tier3_runs: u64,
    pub index_builds: u64,
}
