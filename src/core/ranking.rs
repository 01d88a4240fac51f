//! Ranked frequency tables.
//!
//! Counting preserves first-seen order, and ranking sorts by count
//! descending with a stable sort, so keys with equal counts keep the
//! order in which they first appeared.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// One row of a ranked table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<K> {
    pub key: K,
    pub count: usize,
}

/// Occurrence counter that remembers first-seen order.
#[derive(Debug, Clone)]
pub struct Counter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for Counter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Counter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count of `key`, zero if never seen.
    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// Total occurrences across all keys.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full ranking, most frequent first.
    pub fn ranked(self) -> Vec<Ranked<K>> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
            .into_iter()
            .map(|(key, count)| Ranked { key, count })
            .collect()
    }

    /// The `n` most frequent keys.
    pub fn most_common(self, n: usize) -> Vec<Ranked<K>> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Entries in first-seen order.
    pub fn into_entries(self) -> Vec<(K, usize)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
