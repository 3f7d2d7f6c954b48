// Per-run memo cache for phonetic lookups.
//
// Owned by the resolver and dropped with it, so nothing survives between
// graph builds. Safe to share across rayon workers: values are computed
// outside the lock, and when two workers race on the same word the first
// stored value wins. Resolution is a pure function of the word, so the loser's
// duplicate work is the only cost.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::resolver::RhymeKey;

/// String-keyed compute-once map.
#[derive(Debug)]
pub struct Memo<V> {
    entries: RwLock<HashMap<String, V>>,
}

impl<V> Default for Memo<V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<V: Clone> Memo<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing and storing it on first use.
    pub fn get_or_insert_with(&self, key: &str, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            return value.clone();
        }

        let value = compute();
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key.to_string())
            .or_insert(value)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All memoized lookups the resolver and scorer make, keyed by word.
#[derive(Debug, Default)]
pub struct PhoneticCache {
    /// Resolved rhyme key per word
    pub keys: Memo<RhymeKey>,
    /// First-variant stress pattern per word (`None` when the word is unknown)
    pub stresses: Memo<Option<String>>,
}

impl PhoneticCache {
    pub fn new() -> Self {
        Self::default()
    }
}
