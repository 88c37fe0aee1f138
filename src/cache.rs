// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded memoization of search results.
//!
//! Eviction is by insertion order, not access order: when the cache is full,
//! the key that was *inserted* longest ago goes, however often it was read.
//! `get` never touches recency.
//!
//! The cache is never a source of truth. The word list is immutable for the
//! engine's lifetime, so entries are never stale; a cold cache and a warm one
//! return the same list for the same key.
//!
//! **Invariant**: `len() <= capacity()`.

use crate::normalize::normalize;
use crate::types::SearchMode;
use std::collections::{HashMap, VecDeque};

/// `(folded query, mode)`.
///
/// The folding matches what the mode's matcher is insensitive to, so two
/// queries share a key only if they produce the same results:
/// - `Word`: `normalize(query.trim())`. Tier 1 and Tier 2 both compare
///   folded text.
/// - `Definition`: `query.trim().to_lowercase()`. Definition matching is
///   case-insensitive but diacritic-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    text: String,
    mode: SearchMode,
}

impl CacheKey {
    pub fn new(query: &str, mode: SearchMode) -> Self {
        let trimmed = query.trim();
        let text = match mode {
            SearchMode::Word => normalize(trimmed),
            SearchMode::Definition => trimmed.to_lowercase(),
        };
        Self { text, mode }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }
}

/// FIFO-evicting map from `CacheKey` to a ranked result.
#[derive(Debug, Clone)]
pub struct ResultCache<V> {
    capacity: usize,
    entries: HashMap<CacheKey, V>,
    order: VecDeque<CacheKey>,
}

impl<V> ResultCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert a result. A new key at capacity evicts the oldest key first;
    /// an existing key is overwritten in place and keeps its age.
    ///
    /// Returns the evicted key, if any.
    pub fn put(&mut self, key: CacheKey, value: V) -> Option<CacheKey> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.order.pop_front().inspect(|oldest| {
                self.entries.remove(oldest);
            })
        } else {
            None
        };

        self.order.push_back(key.clone());
        self.entries.insert(key, value);
        evicted
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
