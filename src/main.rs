// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use kosha::{
    load_word_list, normalize, LoadedWords, MatchKind, NormalizationTable, PrefixPattern, Ranked,
    SearchConfig, SearchMode, SearchStats, TieredSearchEngine, WordEntry, WordList,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::display::{self, BOLD, DIM};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            words,
            query,
            mode,
            config,
            json,
        } => run_search(&words, &query, mode, config.as_deref(), json),
        Commands::Repl { words, config } => run_repl(&words, config.as_deref()),
        Commands::Inspect { words } => run_inspect(&words),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("KOSHA_LOG").unwrap_or_else(|_| EnvFilter::new("kosha=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn load_engine(words: &Path, config: Option<&Path>) -> Result<(TieredSearchEngine, LoadedWords), Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };
    let loaded = load_word_list(words)?;
    let engine = TieredSearchEngine::with_entries(config, loaded.entries.clone());
    Ok((engine, loaded))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    mode: SearchMode,
    elapsed_us: f64,
    results: Vec<ResultRow<'a>>,
}

#[derive(Serialize)]
struct ResultRow<'a> {
    #[serde(flatten)]
    entry: &'a WordEntry,
    kind: MatchKind,
}

fn rows<'a>(list: &'a WordList, ranked: &[Ranked]) -> Vec<ResultRow<'a>> {
    ranked
        .iter()
        .filter_map(|r| {
            list.get(r.position).map(|entry| ResultRow {
                entry,
                kind: r.kind,
            })
        })
        .collect()
}

fn run_search(words: &Path, query: &str, mode: SearchMode, config: Option<&Path>, json: bool) -> CliResult {
    let (mut engine, _) = load_engine(words, config)?;

    let start = Instant::now();
    let ranked = engine.search_ranked(query, mode)?;
    let elapsed_us = start.elapsed().as_secs_f64() * 1_000_000.0;

    let results = rows(engine.list(), &ranked);
    if json {
        let output = SearchOutput {
            query,
            mode,
            elapsed_us,
            results,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_results(query, mode, &results, elapsed_us);
    }
    Ok(())
}

fn print_results(query: &str, mode: SearchMode, results: &[ResultRow<'_>], elapsed_us: f64) {
    println!();
    display::section_top(&format!("\"{}\" in {}", query, mode));
    if results.is_empty() {
        display::row(&format!("  {}", display::themed(display::GRAY, &[DIM], "no results")));
    }
    let pattern = PrefixPattern::new(query.trim());
    for (i, result) in results.iter().enumerate() {
        let entry = result.entry;
        let word = display::highlight_headword(&entry.word, result.kind, query, &pattern);
        let head = format!(
            "{:>3}. {} {} {}",
            i + 1,
            display::pad_right(&display::match_badge(result.kind), 12),
            display::pad_right(&word, 20),
            display::themed(display::GRAY, &[DIM], &entry.pos),
        );
        display::row(&head);

        if !entry.definition.is_empty() {
            let definition = display::truncate_chars(&entry.definition, display::BOX_WIDTH - 10);
            let definition = match result.kind {
                MatchKind::Definition => display::highlight_match(&definition, query),
                _ => definition,
            };
            display::row(&format!("       {}", definition));
        }
    }
    display::section_bot();
    println!(
        "  {} results in {}",
        display::themed(display::BRIGHT_CYAN, &[BOLD], &results.len().to_string()),
        display::timing_us(elapsed_us)
    );
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════
// REPL
// ═══════════════════════════════════════════════════════════════════════════

fn run_repl(words: &Path, config: Option<&Path>) -> CliResult {
    let (mut engine, loaded) = load_engine(words, config)?;
    eprintln!(
        "Loaded {} entries ({} dropped). Type a query, or :mode word|definition, :stats, :quit",
        loaded.entries.len(),
        loaded.dropped
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if let Some(command) = input.strip_prefix(':') {
            let mut parts = command.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("quit" | "q"), _) => break,
                (Some("stats"), _) => print_stats(&engine.stats(), engine.cache_len()),
                (Some("mode"), Some(mode)) => match mode.parse::<SearchMode>() {
                    Ok(mode) => {
                        engine.set_mode(mode);
                        eprintln!("mode: {}", mode);
                    }
                    Err(e) => eprintln!("{}", e),
                },
                (Some("mode"), None) => eprintln!("mode: {}", engine.mode()),
                _ => eprintln!("unknown command ':{}'", command),
            }
            continue;
        }

        if input.is_empty() {
            continue;
        }
        let mode = engine.mode();
        let start = Instant::now();
        let ranked = engine.search_ranked(input, mode)?;
        let elapsed_us = start.elapsed().as_secs_f64() * 1_000_000.0;
        print_results(input, mode, &rows(engine.list(), &ranked), elapsed_us);
        io::stdout().flush()?;
    }
    Ok(())
}

fn print_stats(stats: &SearchStats, cache_len: usize) {
    println!();
    display::section_top("SESSION");
    let line = |label: &str, value: String| {
        display::row(&format!("  {} {}", display::pad_right(label, 16), value));
    };
    line("queries", stats.queries.to_string());
    line(
        "cache",
        format!(
            "{} hits, {} misses, {} stored",
            stats.cache_hits, stats.cache_misses, cache_len
        ),
    );
    line(&display::tier_label(1), format!("{} runs", stats.tier1_runs));
    line(&display::tier_label(2), format!("{} runs", stats.tier2_runs));
    line(&display::tier_label(3), format!("{} runs", stats.tier3_runs));
    line("index builds", stats.index_builds.to_string());
    display::section_bot();
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(words: &Path) -> CliResult {
    let loaded = load_word_list(words)?;
    let list = WordList::new(loaded.entries.clone());

    let mut pos_counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut folded_words = 0;
    let mut without_definition = 0;
    for (_, entry, folded) in list.iter() {
        let pos = if entry.pos.is_empty() { "(none)" } else { entry.pos.as_str() };
        *pos_counts.entry(pos).or_default() += 1;
        if entry.word.to_lowercase() != folded {
            folded_words += 1;
        }
        if entry.definition.is_empty() {
            without_definition += 1;
        }
    }

    println!();
    display::section_top(&words.display().to_string());
    let line = |label: &str, value: String| {
        display::row(&format!("  {} {}", display::pad_right(label, 22), value));
    };
    line("records", loaded.total().to_string());
    line("entries", list.len().to_string());
    line(
        "dropped",
        if loaded.dropped > 0 {
            display::themed(display::YELLOW, &[], &loaded.dropped.to_string())
        } else {
            "0".to_string()
        },
    );
    line("without definition", without_definition.to_string());
    line("with diacritics", format!("{} (fold to a different form)", folded_words));
    display::section_bot();

    display::section_top("PARTS OF SPEECH");
    let mut by_count: Vec<_> = pos_counts.into_iter().collect();
    by_count.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    for (pos, count) in by_count {
        line(pos, count.to_string());
    }
    display::section_bot();

    let table = NormalizationTable::global();
    display::section_top("DIACRITICS");
    line(
        "table",
        format!("{} base letters, {} variants", table.len(), table.variant_count()),
    );
    let mut by_base: BTreeMap<char, usize> = BTreeMap::new();
    for entry in list.entries() {
        let mut marked: Vec<char> = entry
            .word
            .chars()
            .filter_map(|c| table.fold(c).filter(|base| c.to_lowercase().ne(Some(*base))))
            .collect();
        marked.sort_unstable();
        marked.dedup();
        for base in marked {
            *by_base.entry(base).or_default() += 1;
        }
    }
    for base in table.bases() {
        if let Some(count) = by_base.get(&base) {
            line(&format!("{} (accented)", base), format!("{} headwords", count));
        }
    }
    display::section_bot();

    let sample: Vec<String> = list
        .iter()
        .filter(|(_, entry, folded)| entry.word.to_lowercase() != *folded)
        .take(5)
        .map(|(_, entry, _)| format!("{} → {}", entry.word, normalize(&entry.word)))
        .collect();
    if !sample.is_empty() {
        display::section_top("FOLDING SAMPLE");
        for s in sample {
            display::row(&format!("  {}", s));
        }
        display::section_bot();
    }
    println!();
    Ok(())
}
