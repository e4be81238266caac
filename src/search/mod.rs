//! Chain enumerator: depth-first search over one-letter extensions.
//!
//! Starting from a word resolved in the store, the search forms every
//! printable-ASCII extension of the current signature in ascending byte
//! order, looks each candidate up in the index, and recurses into every id
//! the entry lists, in stored order. A word with no extension at all is a
//! leaf; the path down to it is offered to the accumulator, which keeps only
//! chains of the best length (see [`results`]).
//!
//! Two properties shape the implementation:
//!
//! - Signatures strictly grow with depth, so no id can reappear on a single
//!   search stack. Cycles are impossible and no visited set is kept.
//! - Candidate signatures are formed with [`signature::insert_sorted`],
//!   which keeps them canonical without re-sorting.
//!
//! Recursion is bounded by [`MAX_CHAIN_DEPTH`]: a path that reaches the
//! bound is abandoned silently, before probing extensions — a deliberate
//! cut, not an emission. The scratch state (path buffer, candidate buffer)
//! lives in [`ChainSearch`] and never exceeds that bound.
//!
//! The search performs no I/O, takes no locks, and runs to completion on
//! the caller's context; the emission order it defines is deterministic for
//! a given store and index.

pub mod results;
pub mod statistics;

pub use results::{ChainAccumulator, ChainResults, PoolChainResults};
pub use statistics::{Counters, Statistics};

use crate::config::{ASCII_MAX, ASCII_MIN, MAX_CHAIN_DEPTH, MAX_WORD_LENGTH};
use crate::index::SignatureLookup;
use crate::signature;
use crate::store::{WordId, WordStore};

/// Depth-first chain enumerator with per-search scratch buffers.
///
/// One search owns the enumerator at a time. The store and index are only
/// read; the enumerator mutates nothing but its own scratch and the
/// accumulator it was handed.
#[derive(Debug)]
pub struct ChainSearch {
    /// Ids of the chain under construction, valid up to the current depth.
    path: [WordId; MAX_CHAIN_DEPTH],
    /// Candidate signature buffer: longest stored signature plus one byte.
    candidate: [u8; MAX_WORD_LENGTH + 1],
    statistics: Statistics,
}

impl ChainSearch {
    pub fn new() -> Self {
        Self {
            path: [0; MAX_CHAIN_DEPTH],
            candidate: [0; MAX_WORD_LENGTH + 1],
            statistics: Statistics::new(),
        }
    }

    /// Counters from the most recent search.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Clear statistics; scratch needs no clearing between searches.
    pub fn reset(&mut self) {
        self.statistics.reset();
    }

    /// Enumerate every longest chain starting from `start_word`.
    ///
    /// Resolves the start word to its lowest id; if it is absent the
    /// accumulator is left untouched — a normal outcome, not an error.
    /// Chains are emitted in the deterministic order given by ascending
    /// extension byte, then stored id order within an index entry.
    pub fn run<S, I, A>(&mut self, index: &I, store: &S, start_word: &[u8], results: &mut A)
    where
        S: WordStore,
        I: SignatureLookup,
        A: ChainAccumulator,
    {
        self.statistics.reset();

        let Some(start) = store.find_id(start_word) else {
            tracing::debug!("start word not in dictionary");
            return;
        };

        self.path[0] = start;
        self.descend(index, store, results, start, 1);

        tracing::debug!(
            nodes = self.statistics.get(Counters::NodesVisited),
            emitted = self.statistics.get(Counters::ChainsEmitted),
            kept = results.chain_count(),
            max_length = results.max_length(),
            "search finished"
        );
    }

    fn descend<S, I, A>(
        &mut self,
        index: &I,
        store: &S,
        results: &mut A,
        current: WordId,
        depth: usize,
    ) where
        S: WordStore,
        I: SignatureLookup,
        A: ChainAccumulator,
    {
        self.statistics.increment(Counters::NodesVisited);

        if depth >= MAX_CHAIN_DEPTH {
            return;
        }

        let sig = store.signature(current);
        let mut found = false;

        for c in ASCII_MIN..=ASCII_MAX {
            let candidate_len = signature::insert_sorted(sig, c, &mut self.candidate);
            self.statistics.increment(Counters::CandidatesProbed);

            if let Some(ids) = index.find(&self.candidate[..candidate_len]) {
                self.statistics.increment(Counters::ExtensionHits);
                found = true;
                for &next in ids {
                    self.path[depth] = next;
                    self.descend(index, store, results, next, depth + 1);
                }
            }
        }

        if !found {
            self.statistics.increment(Counters::ChainsEmitted);
            results.emit(&self.path[..depth]);
        }
    }
}

impl Default for ChainSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper: run one search into a fresh heap accumulator.
pub fn find_longest<S, I>(index: &I, store: &S, start_word: &[u8]) -> ChainResults
where
    S: WordStore,
    I: SignatureLookup,
{
    let mut results = ChainResults::new();
    ChainSearch::new().run(index, store, start_word, &mut results);
    results
}
