// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kosha command-line interface.
//!
//! Three subcommands: `search` runs one query against a word list, `repl`
//! replays stdin line by line as keystrokes against a single engine (so the
//! cache and index behave the way they do behind a search box), and
//! `inspect` summarizes a word list before you point the engine at it.

pub mod display;

use clap::{Parser, Subcommand};
use kosha::SearchMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kosha",
    about = "Incremental dictionary search with diacritic folding and fuzzy fallback",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single query against a JSON word list
    Search {
        /// Path to a JSON array of {word, pos, definition} records
        words: PathBuf,

        /// Search query
        query: String,

        /// Field to search: word (headwords) or definition
        #[arg(short, long, default_value = "word")]
        mode: SearchMode,

        /// TOML file overriding limits, cache and fuzzy settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Read queries from stdin, one per line, against a single engine
    ///
    /// Lines starting with `:` are commands: `:mode word|definition`,
    /// `:stats`, `:quit`.
    Repl {
        /// Path to a JSON array of {word, pos, definition} records
        words: PathBuf,

        /// TOML file overriding limits, cache and fuzzy settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Summarize a word list: counts, parts of speech, diacritic coverage
    Inspect {
        /// Path to a JSON array of {word, pos, definition} records
        words: PathBuf,
    },
}
