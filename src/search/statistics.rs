//! Statistics
//!
//! Counters incremented by the chain enumerator during a search, readable
//! by the caller afterwards. Diagnostics only: they never influence which
//! chains are found or kept.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Words the depth-first search entered.
    NodesVisited,
    /// Candidate signatures formed (94 per visited word, minus depth cuts).
    CandidatesProbed,
    /// Candidate signatures that hit an index entry.
    ExtensionHits,
    /// Chains handed to the accumulator.
    ChainsEmitted,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}
