// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading, configuration, and search.
//!
//! None of these reach the search hot path once an engine is ready. Load
//! failures are absorbed by `TieredSearchEngine::mark_load_failed`; the only
//! thing `search` can refuse is a query that arrives before any word list.

use std::path::PathBuf;

/// The word list could not be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("word list must be a JSON array of objects, found {found}")]
    NotAnArray { found: &'static str },
}

/// A search configuration was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A query could not be answered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search engine is not ready: no word list has been delivered")]
    NotReady,
}
