// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental dictionary search: one keystroke in, a ranked, capped list of
//! entries out.
//!
//! The engine layers four things over an immutable in-memory word list:
//! exact/prefix matching, diacritic folding, approximate matching, and a
//! bounded result cache.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  loader.rs   │────▶│   types.rs   │────▶│    engine.rs     │
//! │ (JSON, drop  │     │ (WordEntry,  │     │ (lifecycle,      │
//! │  bad records)│     │  WordList)   │     │  cache, tiers)   │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!                             │                 │          │
//!                             ▼                 ▼          ▼
//!                   ┌──────────────────┐  ┌──────────┐ ┌──────────┐
//!                   │   normalize/     │  │ search/  │ │ cache.rs │
//!                   │ (table, folding, │  │ (tiers,  │ │ (FIFO)   │
//!                   │  prefix pattern) │  │  dedup)  │ └──────────┘
//!                   └──────────────────┘  └──────────┘
//!                                              │
//!                                              ▼
//!                                         ┌──────────┐
//!                                         │  fuzzy/  │
//!                                         │ (index)  │
//!                                         └──────────┘
//! ```
//!
//! # Tiers
//!
//! | Tier | Mode       | Matches                                   | Cap |
//! |------|------------|-------------------------------------------|-----|
//! | 1    | word       | folded exact, then diacritic-aware prefix | 20  |
//! | 2    | word       | approximate substring, threshold 0.4      | 30  |
//! | 3    | definition | case-insensitive substring of definition  | 30  |
//!
//! Tier 2 only runs when Tier 1 finds fewer than 10 results. Merged word
//! results are capped at 50.
//!
//! # Usage
//!
//! ```
//! use kosha::{SearchConfig, SearchMode, TieredSearchEngine, WordEntry};
//!
//! let mut engine = TieredSearchEngine::new(SearchConfig::default());
//! engine.initialize(vec![
//!     WordEntry::new("kaksi", "n", "a basket"),
//!     WordEntry::new("kaksia", "n", "baskets"),
//! ]);
//!
//! let results = engine.search("kaks", SearchMode::Word).unwrap();
//! assert_eq!(results[0].word, "kaksi");
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod loader;
pub mod normalize;
pub mod search;
pub mod testing;
mod types;

// Re-exports for public API
pub use cache::{CacheKey, ResultCache};
pub use config::{CacheConfig, FuzzyConfig, Limits, SearchConfig};
pub use engine::TieredSearchEngine;
pub use error::{ConfigError, LoadError, SearchError};
pub use fuzzy::{ApproximateIndex, FuzzyHit};
pub use loader::{load_word_list, parse_word_list, read_word_list, LoadedWords};
pub use normalize::{fold_char, normalize, variants, NormalizationTable, PrefixPattern, DIACRITIC_GROUPS};
pub use search::dedup::{merge_tiers, ResultMerger};
pub use search::tiered::{approximate, definition_search, exact_and_prefix};
pub use search::{MatchKind, Ranked};
pub use types::{Readiness, SearchMode, SearchStats, WordEntry, WordList};
