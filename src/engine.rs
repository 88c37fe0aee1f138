// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: lifecycle, caching, and the tier pipeline.
//!
//! # Lifecycle
//!
//! ```text
//!            initialize(list)                 initialize(other list)
//! NotReady ───────────────────▶ Ready ─────────────────────────────────▶ Ready
//!    │                           (index Unbuilt → Built,    (cache cleared, index rebuilt)
//!    │ mark_load_failed           cache empty)
//!    ▼
//! LoadFailed (empty list, every query answers `[]`)
//! ```
//!
//! # Per query
//!
//! ```text
//! trim → empty? ──yes──▶ []                       (no cache interaction)
//!          │no
//!          ▼
//!   cache lookup ──hit──▶ cached result
//!          │miss
//!          ▼
//!   Definition mode: Tier 3
//!   Word mode:       Tier 1 ──≥ trigger──▶ Tier 1 result
//!                      │< trigger
//!                      ▼
//!                    Tier 2 → merge (Tier 1 first, dedup by spelling)
//!          │
//!          ▼
//!   cache store → result
//! ```
//!
//! Everything is synchronous and single-threaded. `search` takes `&mut self`
//! because the cache and counters change; nothing else does after
//! `initialize`.

use crate::cache::{CacheKey, ResultCache};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fuzzy::ApproximateIndex;
use crate::search::dedup::merge_tiers;
use crate::search::tiered::{approximate, definition_search, exact_and_prefix};
use crate::search::Ranked;
use crate::types::{Readiness, SearchMode, SearchStats, WordEntry, WordList};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Fuzzy index lifecycle. Built at most once per word list.
#[derive(Debug)]
enum IndexState {
    Unbuilt,
    Built(ApproximateIndex),
}

/// Multi-tier dictionary search over one immutable word list.
#[derive(Debug)]
pub struct TieredSearchEngine {
    config: SearchConfig,
    list: WordList,
    index: IndexState,
    cache: ResultCache<Vec<Ranked>>,
    mode: SearchMode,
    readiness: Readiness,
    stats: SearchStats,
}

impl Default for TieredSearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl TieredSearchEngine {
    /// A not-yet-ready engine. Searches fail with `NotReady` until
    /// `initialize` or `mark_load_failed` is called.
    pub fn new(config: SearchConfig) -> Self {
        let cache = ResultCache::new(config.cache.capacity);
        Self {
            config,
            list: WordList::empty(),
            index: IndexState::Unbuilt,
            cache,
            mode: SearchMode::default(),
            readiness: Readiness::NotReady,
            stats: SearchStats::default(),
        }
    }

    /// Shorthand for `new` followed by `initialize`.
    pub fn with_entries(config: SearchConfig, entries: Vec<WordEntry>) -> Self {
        let mut engine = Self::new(config);
        engine.initialize(entries);
        engine
    }

    /// Install the session's word list and build the fuzzy index.
    pub fn initialize(&mut self, entries: Vec<WordEntry>) -> &Readiness {
        self.initialize_list(WordList::new(entries))
    }

    /// Install an already-built `WordList`.
    ///
    /// Installing the list that is already installed is a no-op. A different
    /// list (by identity) drops every cached result and the old index.
    pub fn initialize_list(&mut self, list: WordList) -> &Readiness {
        if matches!(self.readiness, Readiness::Ready { .. }) && self.list.same_list(&list) {
            debug!("initialize called with the installed word list, nothing to do");
            return &self.readiness;
        }

        self.list = list;
        self.cache.clear();
        self.index = IndexState::Unbuilt;
        self.readiness = Readiness::Ready {
            entries: self.list.len(),
        };
        info!(entries = self.list.len(), "search engine ready");

        self.ensure_index();
        &self.readiness
    }

    /// Record an upstream load failure. The engine becomes queryable over an
    /// empty list: every search returns `Ok(vec![])`.
    pub fn mark_load_failed(&mut self, reason: impl Display) {
        let reason = reason.to_string();
        warn!(%reason, "word list failed to load, serving empty results");
        self.list = WordList::empty();
        self.cache.clear();
        self.index = IndexState::Unbuilt;
        self.readiness = Readiness::LoadFailed { reason };
    }

    /// Build the fuzzy index if the list is non-empty and it isn't built yet.
    ///
    /// Safe to call any number of times. Returns `true` only when this call
    /// did the build.
    pub fn ensure_index(&mut self) -> bool {
        if self.list.is_empty() {
            return false;
        }
        if let IndexState::Built(index) = &self.index {
            if index.is_for(&self.list) {
                return false;
            }
        }

        let index = ApproximateIndex::build(&self.list, &self.config.fuzzy);
        debug!(headwords = index.len(), "built approximate index");
        self.index = IndexState::Built(index);
        self.stats.index_builds += 1;
        true
    }

    pub fn is_index_built(&self) -> bool {
        matches!(self.index, IndexState::Built(_))
    }

    /// Search with an explicit mode.
    pub fn search(&mut self, query: &str, mode: SearchMode) -> Result<Vec<WordEntry>, SearchError> {
        let ranked = self.search_ranked(query, mode)?;
        let positions: Vec<usize> = ranked.iter().map(|r| r.position).collect();
        Ok(self.list.resolve(&positions))
    }

    /// Search with the active mode (see `set_mode`).
    pub fn search_current(&mut self, query: &str) -> Result<Vec<WordEntry>, SearchError> {
        self.search(query, self.mode)
    }

    /// Like `search`, but returns list positions and how each was matched.
    pub fn search_ranked(&mut self, query: &str, mode: SearchMode) -> Result<Vec<Ranked>, SearchError> {
        if !self.readiness.is_queryable() {
            return Err(SearchError::NotReady);
        }

        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.stats.queries += 1;

        let key = CacheKey::new(query, mode);
        if let Some(cached) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            debug!(key = key.text(), %mode, results = cached.len(), "cache hit");
            return Ok(cached.clone());
        }
        self.stats.cache_misses += 1;

        let results = match mode {
            SearchMode::Word => self.run_word_tiers(query),
            SearchMode::Definition => self.run_definition_tier(query),
        };

        debug!(key = key.text(), %mode, results = results.len(), "cache store");
        if let Some(evicted) = self.cache.put(key, results.clone()) {
            debug!(evicted = evicted.text(), mode = %evicted.mode(), "cache evicted oldest key");
        }
        Ok(results)
    }

    fn run_word_tiers(&mut self, query: &str) -> Vec<Ranked> {
        let limits = self.config.limits;

        self.stats.tier1_runs += 1;
        let mut tier1 = exact_and_prefix(query, &self.list, limits.tier1);
        if tier1.len() >= limits.fuzzy_trigger {
            debug!(tier1 = tier1.len(), "tier 1 sufficient, skipping fuzzy tier");
            tier1.truncate(limits.total);
            return tier1;
        }

        self.ensure_index();
        let tier2 = match &self.index {
            IndexState::Built(index) => {
                self.stats.tier2_runs += 1;
                approximate(query, index, limits.tier2)
            }
            IndexState::Unbuilt => Vec::new(),
        };
        debug!(tier1 = tier1.len(), tier2 = tier2.len(), "merging tiers");

        merge_tiers(&self.list, tier1, &tier2, limits.total)
    }

    fn run_definition_tier(&mut self, query: &str) -> Vec<Ranked> {
        let limits = self.config.limits;
        self.stats.tier3_runs += 1;
        definition_search(query, &self.list, limits.definition.min(limits.total))
    }

    /// Change the active mode. Does not search.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn status(&self) -> &Readiness {
        &self.readiness
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_queryable()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn entries(&self) -> &[WordEntry] {
        self.list.entries()
    }

    pub fn list(&self) -> &WordList {
        &self.list
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Is `(query, mode)` currently memoized?
    pub fn is_cached(&self, query: &str, mode: SearchMode) -> bool {
        self.cache.contains(&CacheKey::new(query, mode))
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
