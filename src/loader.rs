// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The load boundary: raw JSON in, clean `WordEntry`s out.
//!
//! The word list is a JSON array of objects with at least a `word` string:
//!
//! ```json
//! [
//!   { "word": "kaksi", "pos": "n", "definition": "a basket" },
//!   { "word": "kaksia", "pos": "n" }
//! ]
//! ```
//!
//! Records without a usable `word` (missing, not a string, blank) are
//! dropped and counted. `pos` and `definition` fall back to empty strings.
//! Order is preserved. This filter is the only contract the search core
//! relies on.

use crate::error::LoadError;
use crate::types::WordEntry;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Entries that survived filtering, plus how many records were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedWords {
    pub entries: Vec<WordEntry>,
    pub dropped: usize,
}

impl LoadedWords {
    /// Total records seen in the source.
    pub fn total(&self) -> usize {
        self.entries.len() + self.dropped
    }
}

/// Parse a word list from a JSON string.
pub fn parse_word_list(json: &str) -> Result<LoadedWords, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

/// Parse a word list from any reader.
pub fn read_word_list(reader: impl Read) -> Result<LoadedWords, LoadError> {
    let value: Value = serde_json::from_reader(reader)?;
    from_value(value)
}

/// Read and parse a word list file.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<LoadedWords, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = read_word_list(std::io::BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        entries = loaded.entries.len(),
        dropped = loaded.dropped,
        "loaded word list"
    );
    Ok(loaded)
}

fn from_value(value: Value) -> Result<LoadedWords, LoadError> {
    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(LoadError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let mut loaded = LoadedWords {
        entries: Vec::with_capacity(records.len()),
        dropped: 0,
    };

    for record in &records {
        match entry_from_record(record) {
            Some(entry) => loaded.entries.push(entry),
            None => loaded.dropped += 1,
        }
    }

    if loaded.dropped > 0 {
        tracing::warn!(
            dropped = loaded.dropped,
            kept = loaded.entries.len(),
            "dropped word list records without a string `word`"
        );
    }

    Ok(loaded)
}

fn entry_from_record(record: &Value) -> Option<WordEntry> {
    let word = record.get("word")?.as_str()?;
    if word.trim().is_empty() {
        return None;
    }
    let text = |field: &str| {
        record
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Some(WordEntry {
        word: word.to_string(),
        pos: text("pos"),
        definition: text("definition"),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
