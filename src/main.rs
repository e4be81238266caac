//! Host command-line driver.
//!
//! Loads a dictionary file, builds the signature index, runs one chain
//! search, and prints the chain report with per-phase timings.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use anagram_search::{config, io, ChainAccumulator, ChainSearch, Index, Results, Store, WordStore};

#[derive(Parser, Debug)]
#[command(name = "anagram-search")]
#[command(about = "Finds the longest chain of derived anagrams in a dictionary")]
struct Args {
    /// Path to dictionary file (one word per line)
    dictionary: PathBuf,

    /// Word to start the chain from
    start_word: String,
}

fn print_elapsed(label: &str, elapsed: Duration) {
    let ms = elapsed.as_secs_f64() * 1000.0;
    if ms >= 1000.0 {
        println!("{label}: {:.2} s", ms / 1000.0);
    } else {
        println!("{label}: {ms:.3} ms");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let total_start = Instant::now();

    println!("Loading dictionary: {}", args.dictionary.display());
    let load_start = Instant::now();
    let mut store = Store::with_capacity(config::INITIAL_CAPACITY);
    io::load_dictionary(&args.dictionary, &mut store)
        .with_context(|| format!("cannot read dictionary '{}'", args.dictionary.display()))?;
    print_elapsed("Dictionary loaded", load_start.elapsed());
    println!("Words loaded: {}", store.len());

    let start_word = args.start_word.as_bytes();
    if store.find_id(start_word).is_none() {
        bail!("starting word '{}' not found in dictionary", args.start_word);
    }

    println!("\nBuilding index...");
    let index_start = Instant::now();
    let index = Index::build(&store);
    print_elapsed("Index built", index_start.elapsed());
    println!("Unique signatures: {}", index.entry_count());

    println!(
        "\nSearching for longest chains starting from '{}'...",
        args.start_word
    );
    let search_start = Instant::now();
    let mut results = Results::new();
    let mut search = ChainSearch::new();
    search.run(&index, &store, start_word, &mut results);
    print_elapsed("Search completed", search_start.elapsed());

    println!();
    let stdout = std::io::stdout();
    io::write_results(&mut stdout.lock(), &store, &results)?;
    tracing::debug!(
        chains = results.chain_count(),
        max_length = results.max_length(),
        "rendered results"
    );

    println!();
    print_elapsed("Total", total_start.elapsed());

    Ok(())
}
