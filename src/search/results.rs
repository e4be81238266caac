//! Longest-only chain accumulators.
//!
//! An accumulator receives every candidate chain the enumerator emits and
//! keeps only chains of the best length seen so far: a longer chain discards
//! everything stored before it, an equal-length chain is appended until the
//! configured cap, a shorter chain is dropped. Stored order is emission
//! order; nothing is sorted.
//!
//! Each stored chain is an independent copy — the enumerator reuses its
//! path buffer as soon as `emit` returns.

use crate::config::{MAX_CHAINS, MAX_CHAIN_DEPTH, POOL_MAX_CHAINS};
use crate::store::WordId;

/// Receiver seam between the enumerator and a result collection.
pub trait ChainAccumulator {
    /// Offer one candidate chain. The accumulator copies what it keeps.
    fn emit(&mut self, path: &[WordId]);

    /// Length shared by every stored chain (0 while nothing is stored).
    fn max_length(&self) -> usize;

    /// Number of stored chains.
    fn chain_count(&self) -> usize;

    /// The `i`-th stored chain, in emission order.
    fn chain(&self, i: usize) -> &[WordId];

    fn is_empty(&self) -> bool {
        self.chain_count() == 0
    }
}

/// Heap-regime accumulator, capped at [`MAX_CHAINS`].
#[derive(Debug, Default)]
pub struct ChainResults {
    max_length: usize,
    chains: Vec<Vec<WordId>>,
}

impl ChainResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored chains in emission order.
    pub fn chains(&self) -> &[Vec<WordId>] {
        &self.chains
    }
}

impl ChainAccumulator for ChainResults {
    fn emit(&mut self, path: &[WordId]) {
        debug_assert!(!path.is_empty());
        if path.len() < self.max_length {
            return;
        }
        if path.len() > self.max_length {
            self.chains.clear();
            self.max_length = path.len();
        }
        if self.chains.len() < MAX_CHAINS {
            self.chains.push(path.to_vec());
        }
    }

    fn max_length(&self) -> usize {
        self.max_length
    }

    fn chain_count(&self) -> usize {
        self.chains.len()
    }

    fn chain(&self, i: usize) -> &[WordId] {
        &self.chains[i]
    }
}

/// Static-regime accumulator, capped at [`POOL_MAX_CHAINS`].
///
/// Chain storage is a fixed 2-D id pool; rows are wide enough for any path
/// the depth-bounded search can emit.
#[derive(Debug)]
pub struct PoolChainResults {
    max_length: usize,
    count: usize,
    lengths: [u16; POOL_MAX_CHAINS],
    chains: [[WordId; MAX_CHAIN_DEPTH]; POOL_MAX_CHAINS],
}

impl PoolChainResults {
    pub fn new() -> Self {
        Self {
            max_length: 0,
            count: 0,
            lengths: [0; POOL_MAX_CHAINS],
            chains: [[0; MAX_CHAIN_DEPTH]; POOL_MAX_CHAINS],
        }
    }
}

impl Default for PoolChainResults {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainAccumulator for PoolChainResults {
    fn emit(&mut self, path: &[WordId]) {
        debug_assert!(!path.is_empty());
        debug_assert!(path.len() <= MAX_CHAIN_DEPTH);
        if path.len() < self.max_length {
            return;
        }
        if path.len() > self.max_length {
            self.count = 0;
            self.max_length = path.len();
        }
        if self.count < POOL_MAX_CHAINS {
            self.chains[self.count][..path.len()].copy_from_slice(path);
            self.lengths[self.count] = path.len() as u16;
            self.count += 1;
        }
    }

    fn max_length(&self) -> usize {
        self.max_length
    }

    fn chain_count(&self) -> usize {
        self.count
    }

    fn chain(&self, i: usize) -> &[WordId] {
        assert!(i < self.count, "chain index {i} out of range");
        &self.chains[i][..self.lengths[i] as usize]
    }
}
