// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Anchored, diacritic-aware prefix patterns.
//!
//! The query is folded first, then each folded character becomes a character
//! class holding every member of its group: `"ka"` compiles to
//! `^[kKķǩ…][aAàá…]`. Characters outside the table are escaped literally.
//! Matching is case-insensitive, so unmapped scripts with case (Cyrillic,
//! Armenian) still behave.
//!
//! **Invariant**: two queries with the same `normalize` output compile the
//! same pattern. The word-mode cache keys on that output, so a cached result
//! and a fresh one can never disagree. Compatibility characters such as
//! U+212A KELVIN SIGN only reach their group through lower-casing, which
//! `normalize` already does.

use super::normalize;
use super::table::NormalizationTable;
use regex::{Regex, RegexBuilder};

/// Compiled pattern size cap. Queries that blow past it fall back to
/// comparing folded strings.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// A compiled prefix matcher for one query.
#[derive(Debug, Clone)]
pub struct PrefixPattern {
    regex: Option<Regex>,
    folded: String,
}

impl PrefixPattern {
    /// Compile `query` (raw, not normalized) into an anchored alternation.
    pub fn new(query: &str) -> Self {
        let table = NormalizationTable::global();
        let folded = normalize(query);
        let source = pattern_source(&folded, table);

        let regex = match RegexBuilder::new(&source)
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
        {
            Ok(regex) => Some(regex),
            Err(err) => {
                tracing::debug!(
                    query_chars = query.chars().count(),
                    error = %err,
                    "prefix pattern rejected, using folded comparison"
                );
                None
            }
        };

        Self { regex, folded }
    }

    /// Does `word` start with the query, modulo diacritics and case?
    ///
    /// `folded_word` must be `normalize(word)`; it is only consulted when the
    /// pattern could not be compiled.
    pub fn matches(&self, word: &str, folded_word: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(word),
            None => folded_word.starts_with(&self.folded),
        }
    }

    /// Byte offset in `word` where the matched prefix ends.
    ///
    /// `None` when the word doesn't match, or when the pattern could not be
    /// compiled and there is no span to report.
    pub fn prefix_end(&self, word: &str) -> Option<usize> {
        self.regex.as_ref()?.find(word).map(|m| m.end())
    }

    /// The compiled pattern text, if any.
    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }
}

/// `folded` must already be normalized: every char is a base letter or a
/// lower-cased character outside the table.
fn pattern_source(folded: &str, table: &NormalizationTable) -> String {
    let mut source = String::with_capacity(folded.len() * 8 + 1);
    source.push('^');
    for c in folded.chars() {
        match table.variants(c) {
            Some(members) => {
                // Table members are letters only, nothing to escape inside a class.
                source.push('[');
                source.extend(members.iter());
                source.push(']');
            }
            None => {
                let mut buf = [0u8; 4];
                source.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }
    source
}
