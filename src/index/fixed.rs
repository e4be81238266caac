//! Static-regime signature index.

use crate::config::{POOL_HASH_BUCKETS, POOL_MAX_IDS_PER_SIG, POOL_MAX_WORDS};
use crate::index::{fnv1a, SignatureLookup};
use crate::store::{WordId, WordStore};

#[derive(Debug, Clone, Copy)]
struct PoolEntry<'s> {
    /// Borrowed from the word store, like the heap index.
    signature: &'s [u8],
    ids: [WordId; POOL_MAX_IDS_PER_SIG],
    id_count: usize,
    next: Option<u32>,
}

impl<'s> PoolEntry<'s> {
    const EMPTY: PoolEntry<'s> = PoolEntry {
        signature: &[],
        ids: [0; POOL_MAX_IDS_PER_SIG],
        id_count: 0,
        next: None,
    };
}

/// Fixed-capacity signature index for targets without a runtime allocator.
///
/// The entry pool holds `POOL_MAX_WORDS` slots. Distinct signatures can
/// never outnumber words, so building over a full store cannot run out of
/// entries; the only capacity cut is `POOL_MAX_IDS_PER_SIG`, beyond which
/// additional anagrams of one signature are dropped silently.
#[derive(Debug)]
pub struct PoolIndex<'s> {
    buckets: [Option<u32>; POOL_HASH_BUCKETS],
    entries: [PoolEntry<'s>; POOL_MAX_WORDS],
    entry_count: usize,
}

impl<'s> PoolIndex<'s> {
    /// Construct an index over every id currently live in `store`.
    pub fn build<S: WordStore>(store: &'s S) -> Self {
        let mut index = Self {
            buckets: [None; POOL_HASH_BUCKETS],
            entries: [PoolEntry::EMPTY; POOL_MAX_WORDS],
            entry_count: 0,
        };
        for id in 0..store.len() {
            index.insert(store.signature(id), id);
        }
        index
    }

    /// Number of distinct signatures indexed.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    fn insert(&mut self, signature: &'s [u8], id: WordId) {
        let bucket = (fnv1a(signature) % POOL_HASH_BUCKETS as u64) as usize;

        let mut cursor = self.buckets[bucket];
        while let Some(at) = cursor {
            let entry = &mut self.entries[at as usize];
            if entry.signature == signature {
                if entry.id_count < POOL_MAX_IDS_PER_SIG {
                    entry.ids[entry.id_count] = id;
                    entry.id_count += 1;
                } else {
                    tracing::debug!(
                        id,
                        cap = POOL_MAX_IDS_PER_SIG,
                        "entry id list full, dropping anagram"
                    );
                }
                return;
            }
            cursor = entry.next;
        }

        // The store bounds ids at POOL_MAX_WORDS, so a slot always exists
        let at = self.entry_count;
        debug_assert!(at < POOL_MAX_WORDS);
        self.entries[at] = PoolEntry {
            signature,
            ids: [0; POOL_MAX_IDS_PER_SIG],
            id_count: 1,
            next: self.buckets[bucket],
        };
        self.entries[at].ids[0] = id;
        self.buckets[bucket] = Some(at as u32);
        self.entry_count = at + 1;
    }
}

impl SignatureLookup for PoolIndex<'_> {
    fn find(&self, signature: &[u8]) -> Option<&[WordId]> {
        let bucket = (fnv1a(signature) % POOL_HASH_BUCKETS as u64) as usize;

        let mut cursor = self.buckets[bucket];
        while let Some(at) = cursor {
            let entry = &self.entries[at as usize];
            if entry.signature == signature {
                return Some(&entry.ids[..entry.id_count]);
            }
            cursor = entry.next;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PoolDictionary;

    fn dict_of(words: &[&str]) -> Box<PoolDictionary> {
        let mut dict = Box::new(PoolDictionary::new());
        for word in words {
            dict.add(word.as_bytes()).unwrap();
        }
        dict
    }

    #[test]
    fn test_find_by_signature() {
        let dict = dict_of(&["sail", "nails", "aliens"]);
        let index = PoolIndex::build(&*dict);

        assert_eq!(index.find(b"ails"), Some(&[0][..]));
        assert_eq!(index.find(b"ailns"), Some(&[1][..]));
        assert_eq!(index.find(b"zzz"), None);
        assert_eq!(index.entry_count(), 3);
    }

    #[test]
    fn test_anagrams_merge() {
        let dict = dict_of(&["abc", "cab", "bac"]);
        let index = PoolIndex::build(&*dict);
        assert_eq!(index.find(b"abc"), Some(&[0, 1, 2][..]));
        assert_eq!(index.entry_count(), 1);
    }

    #[test]
    fn test_entry_id_cap_drops_silently() {
        // One more anagram than an entry can hold; the overflow id vanishes
        // but everything up to the cap stays intact.
        let mut dict = Box::new(PoolDictionary::new());
        for _ in 0..POOL_MAX_IDS_PER_SIG + 1 {
            dict.add(b"spin").unwrap();
        }
        let index = PoolIndex::build(&*dict);

        let ids = index.find(b"inps").unwrap();
        assert_eq!(ids.len(), POOL_MAX_IDS_PER_SIG);
        let expected: Vec<WordId> = (0..POOL_MAX_IDS_PER_SIG).collect();
        assert_eq!(ids, expected.as_slice());
    }

    #[test]
    fn test_empty_store() {
        let dict = Box::new(PoolDictionary::new());
        let index = PoolIndex::build(&*dict);
        assert_eq!(index.entry_count(), 0);
        assert_eq!(index.find(b"a"), None);
    }
}
