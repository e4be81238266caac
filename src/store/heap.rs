//! Heap-regime word store backed by two byte arenas.

use crate::error::StoreError;
use crate::signature;
use crate::store::{WordId, WordStore};

/// Average word length assumed when converting a capacity hint (in words)
/// into an arena reservation (in bytes).
const ARENA_BYTES_PER_WORD: usize = 16;

/// Offset span shared by the word and signature arenas.
///
/// A word and its signature have equal length and are appended in the same
/// order, so one span addresses both arenas.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// Growable word store for the host deployment.
///
/// Word bytes and signature bytes each live in a single contiguous arena;
/// the per-id table holds offsets, which stay valid across arena
/// reallocation. Both arenas grow geometrically, so loading a dictionary of
/// N words performs O(1) amortized reallocations, not O(N).
#[derive(Debug, Default)]
pub struct Dictionary {
    words: Vec<u8>,
    signatures: Vec<u8>,
    spans: Vec<Span>,
}

impl Dictionary {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with arenas pre-sized for roughly `hint` words.
    ///
    /// The hint only tunes the initial reservation; the store grows past it
    /// transparently.
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            words: Vec::with_capacity(hint * ARENA_BYTES_PER_WORD),
            signatures: Vec::with_capacity(hint * ARENA_BYTES_PER_WORD),
            spans: Vec::with_capacity(hint),
        }
    }

    fn span(&self, id: WordId) -> Span {
        self.spans[id]
    }
}

impl WordStore for Dictionary {
    fn add(&mut self, word: &[u8]) -> Result<WordId, StoreError> {
        signature::validate_word(word)?;

        let start = self.words.len();
        self.words.extend_from_slice(word);
        self.signatures.extend_from_slice(word);
        signature::sort_bytes(&mut self.signatures[start..]);

        let id = self.spans.len();
        self.spans.push(Span {
            start,
            len: word.len(),
        });
        Ok(id)
    }

    fn word(&self, id: WordId) -> &[u8] {
        let span = self.span(id);
        &self.words[span.start..span.start + span.len]
    }

    fn signature(&self, id: WordId) -> &[u8] {
        let span = self.span(id);
        &self.signatures[span.start..span.start + span.len]
    }

    fn len(&self) -> usize {
        self.spans.len()
    }
}
