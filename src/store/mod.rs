//! Word stores: canonical word text plus signatures, under dense ids.
//!
//! A store owns the accepted bytes of every word (case preserved, exactly as
//! added) together with the word's signature, and hands out dense integer
//! ids starting at 0. Duplicate words are accepted and receive distinct ids.
//!
//! Two implementations share the [`WordStore`] contract:
//!
//! - [`Dictionary`] — the heap regime. Words and signatures live in two
//!   growable byte arenas addressed by offset spans, so adding N words costs
//!   O(1) amortized arena reallocations rather than one allocation per word.
//! - [`PoolDictionary`] — the static regime. Fixed two-dimensional pools
//!   sized at compile time; an add beyond either bound fails with
//!   [`StoreError::PoolFull`] and leaves the store consistent.
//!
//! A store is populated monotonically, then frozen for the lifetime of the
//! index built over it; the index borrows signature bytes straight out of
//! the store.

mod fixed;
mod heap;

pub use fixed::PoolDictionary;
pub use heap::Dictionary;

use crate::error::StoreError;

/// Dense id assigned by a store at insertion time.
///
/// The first accepted word gets 0; ids increment by one and stay stable for
/// the lifetime of the store.
pub type WordId = usize;

/// Common contract of the two memory regimes.
///
/// The accessor methods panic on an out-of-range id: ids are produced only
/// by [`add`](WordStore::add) and [`find_id`](WordStore::find_id), so a bad
/// id is a caller bug, not a runtime condition.
pub trait WordStore {
    /// Validate `word`, then append it with a freshly computed signature.
    ///
    /// Returns the assigned id, or an error when the word fails validation
    /// or the store is out of capacity. A failed add has no effect.
    fn add(&mut self, word: &[u8]) -> Result<WordId, StoreError>;

    /// Bytes of the word at `id`, exactly as accepted.
    fn word(&self, id: WordId) -> &[u8];

    /// Signature (sorted bytes) of the word at `id`.
    fn signature(&self, id: WordId) -> &[u8];

    /// Number of live ids.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lowest id whose bytes equal `word`, if any. Linear scan — used once
    /// per search to resolve the start word.
    fn find_id(&self, word: &[u8]) -> Option<WordId> {
        (0..self.len()).find(|&id| self.word(id) == word)
    }
}
