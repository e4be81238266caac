//! Error types for dictionary population.

use thiserror::Error;

/// Errors surfaced by [`WordStore::add`](crate::store::WordStore::add).
///
/// Every variant leaves the store unchanged: a failed add never produces a
/// partial insert or consumes a word id.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("word is empty")]
    EmptyWord,

    #[error("word of {len} bytes exceeds the maximum length {max}")]
    WordTooLong { len: usize, max: usize },

    #[error("word contains byte {byte:#04x} outside the printable range")]
    InvalidByte { byte: u8 },

    #[error("word pool is full ({capacity} entries)")]
    PoolFull { capacity: usize },
}
