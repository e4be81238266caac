//! Common test utilities shared across integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use anagram_search::{ChainAccumulator, Dictionary, PoolDictionary, WordStore};

/// Build a heap-regime dictionary from string words.
pub fn heap_dict(words: &[&str]) -> Dictionary {
    let mut dict = Dictionary::new();
    for word in words {
        dict.add(word.as_bytes()).unwrap();
    }
    dict
}

/// Build a static-regime dictionary from string words.
pub fn pool_dict(words: &[&str]) -> Box<PoolDictionary> {
    let mut dict = Box::new(PoolDictionary::new());
    for word in words {
        dict.add(word.as_bytes()).unwrap();
    }
    dict
}

/// Render every stored chain as `w0->w1->...->wk`, in stored order.
pub fn rendered_chains<S, A>(store: &S, results: &A) -> Vec<String>
where
    S: WordStore,
    A: ChainAccumulator,
{
    (0..results.chain_count())
        .map(|i| {
            results
                .chain(i)
                .iter()
                .map(|&id| String::from_utf8_lossy(store.word(id)).into_owned())
                .collect::<Vec<_>>()
                .join("->")
        })
        .collect()
}
