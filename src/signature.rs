//! Signature normalization and the derived-signature predicate.
//!
//! A word's *signature* is the byte-sorted permutation of its characters:
//! two words share a signature exactly when they are anagrams of each other.
//! Signature `s2` is *derived* from `s1` when deleting exactly one byte from
//! `s2` yields `s1` — the adjacency relation the chain search walks.
//!
//! Words are opaque byte sequences in the printable ASCII range
//! [[`ASCII_MIN`], [`ASCII_MAX`]]. Nothing here lowercases, trims, or
//! interprets UTF-8; a byte outside the 7-bit range reaching the sort is a
//! caller bug and panics.
//!
//! Sorting uses a counting sort over the 128-slot tally array: O(n + 128)
//! per word, no comparisons, stable output for the canonicality guarantees
//! the index relies on.

use crate::config::{ASCII_MAX, ASCII_MIN, MAX_WORD_LENGTH, SIG_ALPHABET};
use crate::error::StoreError;

/// Sort a byte buffer in place with a counting sort.
///
/// # Panics
///
/// Panics if any byte is ≥ 128 (such bytes can never pass word validation).
pub fn sort_bytes(bytes: &mut [u8]) {
    let mut counts = [0u32; SIG_ALPHABET];
    for &b in bytes.iter() {
        counts[b as usize] += 1;
    }

    let mut pos = 0;
    for (value, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            bytes[pos] = value as u8;
            pos += 1;
        }
    }
}

/// Compute the signature of `word` as a fresh buffer.
///
/// Idempotent: applying it to its own output returns the same bytes.
pub fn compute_signature(word: &[u8]) -> Vec<u8> {
    let mut sig = word.to_vec();
    sort_bytes(&mut sig);
    sig
}

/// Splice byte `c` into the sorted sequence `sig`, writing the result to
/// `out`. Returns the new length, always `sig.len() + 1`.
///
/// Keeps the output canonical without re-sorting: a single forward merge of
/// the existing bytes with the one insertion.
///
/// # Panics
///
/// Panics if `out` is shorter than `sig.len() + 1`.
pub fn insert_sorted(sig: &[u8], c: u8, out: &mut [u8]) -> usize {
    let mut i = 0;
    let mut j = 0;
    let mut inserted = false;

    while i < sig.len() {
        if !inserted && c < sig[i] {
            out[j] = c;
            j += 1;
            inserted = true;
        } else {
            out[j] = sig[i];
            i += 1;
            j += 1;
        }
    }

    if !inserted {
        out[j] = c;
        j += 1;
    }

    j
}

/// Test whether `derived` equals `base` with exactly one extra byte at its
/// sorted position.
///
/// Single lockstep scan with one skip allowance; any length difference other
/// than one fails immediately.
pub fn is_derived(base: &[u8], derived: &[u8]) -> bool {
    if derived.len() != base.len() + 1 {
        return false;
    }

    let mut i = 0;
    let mut j = 0;
    let mut skipped = false;

    while j < derived.len() {
        if i < base.len() && base[i] == derived[j] {
            i += 1;
            j += 1;
        } else if !skipped {
            skipped = true;
            j += 1;
        } else {
            return false;
        }
    }

    i == base.len()
}

/// Validate a token for dictionary entry.
///
/// Rejects the empty word, words longer than [`MAX_WORD_LENGTH`], and any
/// byte outside [[`ASCII_MIN`], [`ASCII_MAX`]] — so whitespace can never
/// appear in a stored word.
pub fn validate_word(word: &[u8]) -> Result<(), StoreError> {
    if word.is_empty() {
        return Err(StoreError::EmptyWord);
    }
    if word.len() > MAX_WORD_LENGTH {
        return Err(StoreError::WordTooLong {
            len: word.len(),
            max: MAX_WORD_LENGTH,
        });
    }
    for &byte in word {
        if !(ASCII_MIN..=ASCII_MAX).contains(&byte) {
            return Err(StoreError::InvalidByte { byte });
        }
    }
    Ok(())
}

/// Predicate form of [`validate_word`].
pub fn is_valid_word(word: &[u8]) -> bool {
    validate_word(word).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_bytes() {
        let mut buf = *b"dcba";
        sort_bytes(&mut buf);
        assert_eq!(&buf, b"abcd");

        let mut empty: [u8; 0] = [];
        sort_bytes(&mut empty);
    }

    #[test]
    fn test_compute_signature_is_sorted() {
        assert_eq!(compute_signature(b"bafced"), b"abcdef");
        assert_eq!(compute_signature(b"aa"), b"aa");
        assert_eq!(compute_signature(b"~!"), b"!~");
    }

    #[test]
    fn test_compute_signature_idempotent() {
        for word in [&b"listen"[..], b"Silent", b"a!Z9", b"zzzaaa"] {
            let once = compute_signature(word);
            let twice = compute_signature(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_anagrams_share_signature() {
        assert_eq!(compute_signature(b"sail"), compute_signature(b"ails"));
        // Case matters: words are opaque bytes
        assert_ne!(compute_signature(b"Sail"), compute_signature(b"sail"));
    }

    #[test]
    fn test_insert_sorted_positions() {
        let mut out = [0u8; 8];

        let n = insert_sorted(b"bcd", b'a', &mut out);
        assert_eq!(&out[..n], b"abcd");

        let n = insert_sorted(b"acd", b'b', &mut out);
        assert_eq!(&out[..n], b"abcd");

        let n = insert_sorted(b"abc", b'd', &mut out);
        assert_eq!(&out[..n], b"abcd");

        let n = insert_sorted(b"abc", b'b', &mut out);
        assert_eq!(&out[..n], b"abbc");

        let n = insert_sorted(b"", b'q', &mut out);
        assert_eq!(&out[..n], b"q");
    }

    #[test]
    fn test_is_derived() {
        assert!(is_derived(b"abck", b"abcek"));
        assert!(is_derived(b"", b"x"));
        assert!(is_derived(b"aab", b"aabb"));

        // Extra byte at either end
        assert!(is_derived(b"bcd", b"abcd"));
        assert!(is_derived(b"abc", b"abcd"));

        // Wrong length difference
        assert!(!is_derived(b"abc", b"abc"));
        assert!(!is_derived(b"abc", b"abcde"));
        assert!(!is_derived(b"abcd", b"abc"));

        // Right length, wrong content
        assert!(!is_derived(b"abc", b"abde"));
        assert!(!is_derived(b"abck", b"abcdg"));
    }

    #[test]
    fn test_derivation_round_trip() {
        let sig = compute_signature(b"nails");
        let mut out = [0u8; 16];
        for c in [b'!', b'a', b'm', b'~'] {
            let n = insert_sorted(&sig, c, &mut out);
            assert_eq!(n, sig.len() + 1);
            assert!(is_derived(&sig, &out[..n]));
        }
    }

    #[test]
    fn test_validate_word() {
        assert_eq!(validate_word(b""), Err(StoreError::EmptyWord));
        assert_eq!(
            validate_word(b"has space"),
            Err(StoreError::InvalidByte { byte: b' ' })
        );
        assert_eq!(
            validate_word(b"tab\there"),
            Err(StoreError::InvalidByte { byte: b'\t' })
        );
        assert!(validate_word(b"!").is_ok());
        assert!(validate_word(b"~").is_ok());
        assert!(is_valid_word(b"Par-boil'd"));
        assert!(!is_valid_word("caf\u{e9}".as_bytes()));
    }

    #[test]
    fn test_validate_word_length_boundary() {
        let at_limit = vec![b'a'; MAX_WORD_LENGTH];
        assert!(validate_word(&at_limit).is_ok());

        let over = vec![b'a'; MAX_WORD_LENGTH + 1];
        assert_eq!(
            validate_word(&over),
            Err(StoreError::WordTooLong {
                len: MAX_WORD_LENGTH + 1,
                max: MAX_WORD_LENGTH,
            })
        );
    }
}
