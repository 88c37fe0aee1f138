// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search tuning: result caps, the Tier 2 trigger, cache size, fuzzy threshold.
//!
//! Every field has a default, so an empty TOML document is a valid config and
//! a partial one only overrides what it names:
//!
//! ```toml
//! [limits]
//! tier1 = 20
//! tier2 = 30
//! definition = 30
//! total = 50
//! fuzzy_trigger = 10
//!
//! [cache]
//! capacity = 100
//!
//! [fuzzy]
//! threshold = 0.4
//! max_edits = 2
//! ignore_field_norm = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub limits: Limits,
    pub cache: CacheConfig,
    pub fuzzy: FuzzyConfig,
}

/// Result caps per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Exact + prefix results.
    pub tier1: usize,
    /// Fuzzy results considered for the merge.
    pub tier2: usize,
    /// Definition-substring results.
    pub definition: usize,
    /// Final merged list.
    pub total: usize,
    /// Tier 2 runs only when Tier 1 finds fewer than this many results.
    pub fuzzy_trigger: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            tier1: 20,
            tier2: 30,
            definition: 30,
            total: 50,
            fuzzy_trigger: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Distinct `(query, mode)` keys kept. 0 disables caching.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FuzzyConfig {
    /// Maximum `distance / query_len` for a candidate (0 = exact, 1 = anything).
    pub threshold: f64,
    /// Hard cap on edit distance, applied on top of `threshold`.
    pub max_edits: Option<usize>,
    /// Score single- and multi-word headwords alike.
    pub ignore_field_norm: bool,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            threshold: 0.4,
            max_edits: None,
            ignore_field_norm: false,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        for (field, value) in [
            ("limits.tier1", limits.tier1),
            ("limits.tier2", limits.tier2),
            ("limits.definition", limits.definition),
            ("limits.total", limits.total),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be at least 1".to_string(),
                });
            }
        }

        if limits.fuzzy_trigger > limits.tier1 {
            return Err(ConfigError::Invalid {
                field: "limits.fuzzy_trigger",
                reason: format!(
                    "{} exceeds limits.tier1 ({}), Tier 2 would always run",
                    limits.fuzzy_trigger, limits.tier1
                ),
            });
        }

        let threshold = self.fuzzy.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid {
                field: "fuzzy.threshold",
                reason: format!("{} is outside [0, 1]", threshold),
            });
        }

        Ok(())
    }
}
