// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: where the keystroke turns into suggestions.
//!
//! The tiers run in order. Tier 1 (exact, then prefix) is a linear scan over
//! folded headwords and answers most keystrokes on its own. Tier 2 (fuzzy)
//! only runs when Tier 1 comes back thin. Tier 3 (definition substring) is a
//! separate mode, not a fallback.
//!
//! Everything here is a pure function of `(query, list)`. Caching and
//! lifecycle live in `engine`.

pub mod dedup;
pub mod tiered;

use serde::Serialize;

/// How a result was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Folded headword equals the folded query.
    Exact,
    /// Headword starts with the query, modulo diacritics and case.
    Prefix,
    /// Approximate match from the fuzzy index.
    Fuzzy,
    /// Query found inside the definition.
    Definition,
}

impl MatchKind {
    /// Pipeline stage that produced this kind of match (1, 2 or 3).
    pub fn tier(self) -> u8 {
        match self {
            MatchKind::Exact | MatchKind::Prefix => 1,
            MatchKind::Fuzzy => 2,
            MatchKind::Definition => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Prefix => "prefix",
            MatchKind::Fuzzy => "fuzzy",
            MatchKind::Definition => "definition",
        }
    }
}

/// A result slot: list position plus how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ranked {
    pub position: usize,
    pub kind: MatchKind,
}

impl Ranked {
    pub fn new(position: usize, kind: MatchKind) -> Self {
        Self { position, kind }
    }
}
