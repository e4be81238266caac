//! Derived-anagram chain search engine.
//!
//! A *derived anagram* of a word uses all of the word's letters plus one
//! more, rearranged freely: `sail -> nails -> aliens -> salines`. Given a
//! dictionary and a starting word, this crate enumerates every longest
//! chain of such one-letter extensions.
//!
//! # Architecture
//!
//! The engine is built from small components wired at trait seams:
//!
//! - [`signature`] — canonical byte-sorted signatures, the one-extra-byte
//!   derivation predicate, and word validation.
//! - [`store`] — owns word text and signatures under dense ids
//!   ([`store::WordStore`]).
//! - [`index`] — FNV-1a hash table from signature to the ids sharing it
//!   ([`index::SignatureLookup`]); borrows its keys from the store.
//! - [`search`] — the depth-first enumerator and the longest-only
//!   accumulators ([`search::ChainAccumulator`]).
//! - [`io`] — dictionary file loading and chain report rendering.
//!
//! A session populates a store, freezes it under an index, then runs any
//! number of searches; store and index are read-only while a search runs,
//! and the search mutates only its own scratch and the accumulator.
//!
//! # Memory regimes
//!
//! Every component exists in two regimes with identical observable
//! behavior: a heap regime (growable arenas, geometric reallocation) for
//! hosts, and a static regime (compile-time sized pools, no allocation
//! after construction) for embedded targets. Both are always compiled; the
//! `static-pool` and `embedded` cargo features pick which one backs the
//! [`Store`], [`Index`] and [`Results`] aliases, and `embedded` also
//! shrinks every limit in [`config`] to fit a small SRAM.
//!
//! # Example
//!
//! ```
//! use anagram_search::{find_longest, ChainAccumulator, SignatureIndex, Dictionary, WordStore};
//!
//! let mut dict = Dictionary::new();
//! for word in ["sail", "nails", "aliens", "salines"] {
//!     dict.add(word.as_bytes()).unwrap();
//! }
//! let index = SignatureIndex::build(&dict);
//!
//! let results = find_longest(&index, &dict, b"sail");
//! assert_eq!(results.max_length(), 4);
//! assert_eq!(results.chain_count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod io;
pub mod search;
pub mod signature;
pub mod store;

// Re-export commonly used types
pub use error::StoreError;
pub use index::{PoolIndex, SignatureIndex, SignatureLookup};
pub use search::{
    find_longest, ChainAccumulator, ChainResults, ChainSearch, Counters, PoolChainResults,
    Statistics,
};
pub use store::{Dictionary, PoolDictionary, WordId, WordStore};

/// Store type selected by the build-time regime features.
#[cfg(not(static_regime))]
pub type Store = Dictionary;
#[cfg(static_regime)]
pub type Store = PoolDictionary;

/// Index type selected by the build-time regime features.
#[cfg(not(static_regime))]
pub type Index<'s> = SignatureIndex<'s>;
#[cfg(static_regime)]
pub type Index<'s> = PoolIndex<'s>;

/// Accumulator type selected by the build-time regime features.
#[cfg(not(static_regime))]
pub type Results = ChainResults;
#[cfg(static_regime)]
pub type Results = PoolChainResults;
