// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! A bounded approximate-substring distance for one-off comparisons, and the
//! `ApproximateIndex` that runs it over every headword of the dictionary.

mod index;
mod levenshtein;

pub use index::{ApproximateIndex, FuzzyHit};
pub use levenshtein::*;
