//! Compile-time configuration for the chain search engine.
//!
//! This module defines every sizing knob as a `pub const`, switched between
//! two deployment profiles by cargo features:
//!
//! - *(default)* — **host** profile: large limits, suitable for file-backed
//!   dictionaries with millions of words.
//! - `embedded` — **embedded** profile: small limits that fit the fixed
//!   pools into a few KB of SRAM.
//!
//! Orthogonally, the `static-pool` feature (or `embedded`, which implies it)
//! makes the static memory regime back the crate's default type aliases.
//! `build.rs` folds both features into the single derived cfg flag
//! `static_regime`.
//!
//! # Example
//!
//! ```bash
//! # Default: host limits, heap regime
//! cargo build
//!
//! # Host limits, static pools
//! cargo build --features static-pool
//!
//! # Embedded limits, static pools
//! cargo build --features embedded
//! ```

/// Smallest byte permitted in a word (`!`).
///
/// Words are opaque byte sequences; only the printable ASCII range is
/// accepted, so whitespace and control bytes can never enter a dictionary.
pub const ASCII_MIN: u8 = 33;

/// Largest byte permitted in a word (`~`).
pub const ASCII_MAX: u8 = 126;

/// Tally array size for the counting sort (one slot per 7-bit byte value).
pub const SIG_ALPHABET: usize = 128;

/// FNV-1a offset basis (32-bit parameters, widened arithmetic).
pub const FNV_OFFSET_BASIS: u64 = 2_166_136_261;

/// FNV-1a prime (32-bit parameters, widened arithmetic).
pub const FNV_PRIME: u64 = 16_777_619;

/// Longest word accepted by validation. Longer tokens are rejected.
///
/// Also the row width of the static store's word and signature pools.
#[cfg(not(feature = "embedded"))]
pub const MAX_WORD_LENGTH: usize = 256;

#[cfg(feature = "embedded")]
pub const MAX_WORD_LENGTH: usize = 31;

/// Default capacity hint passed to `Dictionary::with_capacity` by the host
/// driver. The static store ignores hints entirely.
#[cfg(not(feature = "embedded"))]
pub const INITIAL_CAPACITY: usize = 1024;

#[cfg(feature = "embedded")]
pub const INITIAL_CAPACITY: usize = POOL_MAX_WORDS;

/// Lower bound on the heap index's bucket array. The build step sizes the
/// array at `max(store.len(), MIN_HASH_BUCKETS)`.
#[cfg(not(feature = "embedded"))]
pub const MIN_HASH_BUCKETS: usize = 1024;

#[cfg(feature = "embedded")]
pub const MIN_HASH_BUCKETS: usize = POOL_HASH_BUCKETS;

/// Recursion cut-off for the depth-first search.
///
/// A search whose path already holds this many words stops extending and
/// discards the path silently; it also bounds the path scratch buffer, so
/// the longest chain that can ever be emitted has `MAX_CHAIN_DEPTH - 1`
/// words.
#[cfg(not(feature = "embedded"))]
pub const MAX_CHAIN_DEPTH: usize = 256;

#[cfg(feature = "embedded")]
pub const MAX_CHAIN_DEPTH: usize = 16;

/// Cap on chains retained by the heap accumulator. Beyond it, chains of the
/// current best length are dropped silently.
#[cfg(not(feature = "embedded"))]
pub const MAX_CHAINS: usize = 10_000;

#[cfg(feature = "embedded")]
pub const MAX_CHAINS: usize = POOL_MAX_CHAINS;

/// Number of word slots in the static store.
#[cfg(not(feature = "embedded"))]
pub const POOL_MAX_WORDS: usize = 1024;

#[cfg(feature = "embedded")]
pub const POOL_MAX_WORDS: usize = 64;

/// Bucket array size of the static index (one bucket per word slot).
pub const POOL_HASH_BUCKETS: usize = POOL_MAX_WORDS;

/// Cap on word ids recorded per signature entry in the static index.
/// Additional anagrams of an already-full entry are dropped silently.
#[cfg(not(feature = "embedded"))]
pub const POOL_MAX_IDS_PER_SIG: usize = 32;

#[cfg(feature = "embedded")]
pub const POOL_MAX_IDS_PER_SIG: usize = 8;

/// Cap on chains retained by the static accumulator.
#[cfg(not(feature = "embedded"))]
pub const POOL_MAX_CHAINS: usize = 256;

#[cfg(feature = "embedded")]
pub const POOL_MAX_CHAINS: usize = 8;

// The DFS needs one path slot per word and a candidate buffer one byte
// longer than the longest stored signature.
const _: () = assert!(MAX_CHAIN_DEPTH >= 2, "chains need at least two slots");
const _: () = assert!(
    ASCII_MIN < ASCII_MAX && (ASCII_MAX as usize) < SIG_ALPHABET,
    "printable range must fit the tally array"
);
const _: () = assert!(
    POOL_MAX_IDS_PER_SIG >= 1 && POOL_MAX_CHAINS >= 1,
    "static pools must hold at least one element"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_limits() {
        #[cfg(not(feature = "embedded"))]
        {
            assert_eq!(MAX_WORD_LENGTH, 256);
            assert_eq!(MAX_CHAIN_DEPTH, 256);
            assert_eq!(MAX_CHAINS, 10_000);
            assert_eq!(POOL_MAX_WORDS, 1024);
        }
        #[cfg(feature = "embedded")]
        {
            assert_eq!(MAX_WORD_LENGTH, 31);
            assert_eq!(MAX_CHAIN_DEPTH, 16);
            assert_eq!(MAX_CHAINS, 8);
            assert_eq!(POOL_MAX_WORDS, 64);
        }
    }

    #[test]
    fn test_buckets_cover_pool() {
        // Distinct signatures never outnumber words, so the static index can
        // always hold every entry.
        assert!(POOL_HASH_BUCKETS >= POOL_MAX_WORDS);
        assert!(MIN_HASH_BUCKETS >= 1);
    }

    #[test]
    fn test_printable_range() {
        assert_eq!(ASCII_MIN, b'!');
        assert_eq!(ASCII_MAX, b'~');
        assert_eq!(ASCII_MAX - ASCII_MIN + 1, 94);
    }
}
