//! Dictionary loading and result rendering.
//!
//! The dictionary format is line-oriented raw bytes: one token per line,
//! trailing `\r`, `\n`, space and tab stripped, blank lines ignored. Lines
//! that fail validation — or no longer fit a fixed pool — are skipped, not
//! fatal. No character-set translation is performed anywhere: tokens go
//! into the store exactly as read and come back out exactly as stored.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::search::ChainAccumulator;
use crate::store::WordStore;

/// Populate `store` from the dictionary file at `path`.
///
/// Returns the number of words actually added, which can be lower than the
/// number of lines in the file.
pub fn load_dictionary<S: WordStore>(path: &Path, store: &mut S) -> io::Result<usize> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file), store)
}

/// Populate `store` from any buffered byte source.
pub fn load_from_reader<R: BufRead, S: WordStore>(
    mut reader: R,
    store: &mut S,
) -> io::Result<usize> {
    let mut line = Vec::new();
    let mut added = 0;
    let mut skipped = 0u64;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let token = trim_trailing(&line);
        if token.is_empty() {
            continue;
        }

        match store.add(token) {
            Ok(_) => added += 1,
            Err(reason) => {
                skipped += 1;
                tracing::debug!(%reason, "skipping dictionary line");
            }
        }
    }

    if skipped > 0 {
        tracing::info!(added, skipped, "dictionary load finished with skips");
    }
    Ok(added)
}

fn trim_trailing(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && matches!(line[end - 1], b'\n' | b'\r' | b' ' | b'\t') {
        end -= 1;
    }
    &line[..end]
}

/// Render a result set in the chain report format.
///
/// `No chains found.` when the set is empty; otherwise a one-line summary
/// followed by one `word0->word1->...->wordK` line per chain, in stored
/// order, with no trailing whitespace.
pub fn write_results<S, A, W>(out: &mut W, store: &S, results: &A) -> io::Result<()>
where
    S: WordStore,
    A: ChainAccumulator,
    W: Write,
{
    if results.is_empty() {
        writeln!(out, "No chains found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Found {} chain(s) of length {}:",
        results.chain_count(),
        results.max_length()
    )?;

    for i in 0..results.chain_count() {
        for (j, &id) in results.chain(i).iter().enumerate() {
            if j > 0 {
                out.write_all(b"->")?;
            }
            out.write_all(store.word(id))?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}
