//! Static-regime word store backed by compile-time sized pools.

use crate::config::{MAX_WORD_LENGTH, POOL_MAX_WORDS};
use crate::error::StoreError;
use crate::signature;
use crate::store::{WordId, WordStore};

/// Fixed-capacity word store for targets without a runtime allocator.
///
/// Words and signatures occupy two `POOL_MAX_WORDS x MAX_WORD_LENGTH` byte
/// pools; nothing is allocated after construction. An add that would exceed
/// either bound fails with [`StoreError`] and the store stays consistent —
/// there is no partial insert.
///
/// The struct is large under the host profile; hosts that want one on the
/// heap can `Box::new(PoolDictionary::new())`, while embedded builds place
/// it in a `static` cell.
#[derive(Debug)]
pub struct PoolDictionary {
    words: [[u8; MAX_WORD_LENGTH]; POOL_MAX_WORDS],
    signatures: [[u8; MAX_WORD_LENGTH]; POOL_MAX_WORDS],
    lengths: [u16; POOL_MAX_WORDS],
    count: usize,
}

impl PoolDictionary {
    /// Create an empty store. All pool bytes start zeroed.
    pub fn new() -> Self {
        Self {
            words: [[0; MAX_WORD_LENGTH]; POOL_MAX_WORDS],
            signatures: [[0; MAX_WORD_LENGTH]; POOL_MAX_WORDS],
            lengths: [0; POOL_MAX_WORDS],
            count: 0,
        }
    }

    /// Create an empty store, ignoring the capacity hint. The hint exists
    /// so both regimes construct identically; fixed bounds apply here.
    pub fn with_capacity(_hint: usize) -> Self {
        Self::new()
    }

    fn length(&self, id: WordId) -> usize {
        assert!(id < self.count, "word id {id} out of range");
        self.lengths[id] as usize
    }
}

impl Default for PoolDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl WordStore for PoolDictionary {
    fn add(&mut self, word: &[u8]) -> Result<WordId, StoreError> {
        signature::validate_word(word)?;
        if self.count >= POOL_MAX_WORDS {
            return Err(StoreError::PoolFull {
                capacity: POOL_MAX_WORDS,
            });
        }

        let id = self.count;
        self.words[id][..word.len()].copy_from_slice(word);
        self.signatures[id][..word.len()].copy_from_slice(word);
        signature::sort_bytes(&mut self.signatures[id][..word.len()]);
        self.lengths[id] = word.len() as u16;
        self.count += 1;
        Ok(id)
    }

    fn word(&self, id: WordId) -> &[u8] {
        &self.words[id][..self.length(id)]
    }

    fn signature(&self, id: WordId) -> &[u8] {
        &self.signatures[id][..self.length(id)]
    }

    fn len(&self) -> usize {
        self.count
    }
}
