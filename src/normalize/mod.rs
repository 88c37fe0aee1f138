// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Diacritic folding: "Kàksí" and "kaksi" compare equal.
//!
//! Two tools for two sub-problems. `normalize` folds a whole string for
//! equality and fuzzy comparison. `PrefixPattern` goes the other way: it
//! expands a query into a per-character alternation so a plain ASCII query
//! can prefix-match a headword stored with diacritics without touching the
//! headword itself.
//!
//! Folding is for comparison only. Results always carry the original text.

mod pattern;
pub mod table;

pub use pattern::PrefixPattern;
pub use table::{NormalizationTable, DIACRITIC_GROUPS};

/// Fold `text` to base-letter form.
///
/// Known variants become their lowercase base; every other character is
/// lower-cased. Idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// - "Café" → "cafe"
/// - "ĐẶNG" → "dang"
/// - "ককসি" → "ককসি" (no table entry, no case)
pub fn normalize(text: &str) -> String {
    NormalizationTable::global().normalize(text)
}

/// Base letter for a single variant character.
pub fn fold_char(c: char) -> Option<char> {
    NormalizationTable::global().fold(c)
}

/// All members of the group headed by `base`.
pub fn variants(base: char) -> Option<&'static [char]> {
    NormalizationTable::global().variants(base)
}
